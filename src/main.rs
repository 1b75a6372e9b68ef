mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod movement;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::window::WindowResolution;

/// Fixed physics rate in Hz (0.02 s steps).
const PHYSICS_HZ: f64 = 50.0;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Tabby".to_string(),
            resolution: WindowResolution::new(1280, 720),
            resizable: false,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity(Vec2::NEG_Y * 1200.0))
    .insert_resource(Time::<Fixed>::from_hz(PHYSICS_HZ))
    .insert_resource(ClearColor(Color::srgb(0.12, 0.14, 0.22)))
    .add_plugins((
        core::CorePlugin,
        level::LevelPlugin,
        movement::MovementPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
