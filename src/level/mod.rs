//! Level domain: static rooftop geometry, window sills, crates and puddles.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Surface, SurfaceKind, Zone, ZoneKind};

/// Top of the ground strip in world units.
pub const GROUND_TOP: f32 = -240.0;
const GROUND_THICKNESS: f32 = 40.0;

/// Ground extends well past the right edge of the viewport so the tabby can walk out.
const GROUND_LEFT: f32 = -700.0;
const GROUND_RIGHT: f32 = 1400.0;

/// Left boundary keeps the tabby from walking off the start of the level.
const BACK_WALL_X: f32 = -660.0;

/// (center x, height above ground, width)
const WINDOW_SILLS: [(f32, f32, f32); 3] = [
    (-250.0, 90.0, 140.0),
    (20.0, 170.0, 120.0),
    (300.0, 110.0, 150.0),
];

/// (center x, size)
const CRATES: [(f32, f32); 2] = [(-380.0, 48.0), (460.0, 64.0)];

/// (center x, width)
const PUDDLES: [(f32, f32); 2] = [(-110.0, 120.0), (170.0, 90.0)];
const PUDDLE_DEPTH: f32 = 12.0;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_level);
    }
}

fn solid_layers(layer: GameLayer) -> CollisionLayers {
    CollisionLayers::new(layer, [GameLayer::Player])
}

pub(crate) fn spawn_level(mut commands: Commands) {
    let ground_color = Color::srgb(0.35, 0.33, 0.38);
    let sill_color = Color::srgb(0.75, 0.72, 0.65);
    let crate_color = Color::srgb(0.55, 0.4, 0.25);
    let puddle_color = Color::srgba(0.3, 0.5, 0.9, 0.7);

    // Ground
    let ground_width = GROUND_RIGHT - GROUND_LEFT;
    commands.spawn((
        Surface(SurfaceKind::Ground),
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(ground_width, GROUND_THICKNESS)),
            ..default()
        },
        Transform::from_xyz(
            (GROUND_LEFT + GROUND_RIGHT) * 0.5,
            GROUND_TOP - GROUND_THICKNESS * 0.5,
            0.0,
        ),
        RigidBody::Static,
        Collider::rectangle(ground_width, GROUND_THICKNESS),
        solid_layers(GameLayer::Ground),
    ));

    // Back wall
    commands.spawn((
        Surface(SurfaceKind::Obstacle),
        Transform::from_xyz(BACK_WALL_X, 0.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(40.0, 720.0),
        solid_layers(GameLayer::Obstacle),
    ));

    for (x, height, width) in WINDOW_SILLS {
        commands.spawn((
            Surface(SurfaceKind::WindowSill),
            Sprite {
                color: sill_color,
                custom_size: Some(Vec2::new(width, 14.0)),
                ..default()
            },
            Transform::from_xyz(x, GROUND_TOP + height, 0.0),
            RigidBody::Static,
            Collider::rectangle(width, 14.0),
            solid_layers(GameLayer::Ground),
        ));
    }

    for (x, size) in CRATES {
        commands.spawn((
            Surface(SurfaceKind::Obstacle),
            Sprite {
                color: crate_color,
                custom_size: Some(Vec2::splat(size)),
                ..default()
            },
            Transform::from_xyz(x, GROUND_TOP + size * 0.5, 0.0),
            RigidBody::Static,
            Collider::rectangle(size, size),
            solid_layers(GameLayer::Obstacle),
        ));
    }

    // Puddle sensors sit on top of the ground so the tabby wades through them
    for (x, width) in PUDDLES {
        commands.spawn((
            Zone(ZoneKind::Puddle),
            Sprite {
                color: puddle_color,
                custom_size: Some(Vec2::new(width, PUDDLE_DEPTH)),
                ..default()
            },
            Transform::from_xyz(x, GROUND_TOP + PUDDLE_DEPTH * 0.5, 0.5),
            Collider::rectangle(width, PUDDLE_DEPTH),
            Sensor,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ));
    }

    info!(
        "Level spawned: {} window sills, {} crates, {} puddles",
        WINDOW_SILLS.len(),
        CRATES.len(),
        PUDDLES.len()
    );
}
