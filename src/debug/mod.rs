//! Debug overlay for tuning the controller (dev-tools feature).
//!
//! Press F3 to toggle a readout of the tabby's controller state.

use bevy::prelude::*;

use crate::movement::{CharacterState, Player};

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether to show the controller info overlay
    pub show_info: bool,
}

/// Marker for the controller info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_debug_info, update_debug_info).chain());
    }
}

fn toggle_debug_info(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
        info!("Debug info overlay: {}", debug_state.show_info);
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        ZIndex(300),
    ));
}

fn update_debug_info(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<(&Transform, &CharacterState), With<Player>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut overlay_query: Query<(Entity, &mut Text), With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for (entity, _) in &overlay_query {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    let Ok((_, mut text)) = overlay_query.single_mut() else {
        spawn_debug_info_overlay(&mut commands);
        return;
    };

    let Some((transform, state)) = player_query.iter().next() else {
        return;
    };

    let pos = transform.translation;
    let viewport_x = cameras
        .single()
        .ok()
        .and_then(|(camera, camera_transform)| camera.world_to_ndc(camera_transform, pos))
        .map(|ndc| (ndc.x + 1.0) * 0.5);

    **text = format!(
        "Pos: ({:.0}, {:.0})\nViewport x: {}\nWet: {}\nCan jump: {}\nJumps: {}/{}\nSpeed: {:.0}\nLevel cleared: {}\nEnd scene: {}",
        pos.x,
        pos.y,
        viewport_x.map_or_else(|| "-".to_string(), |x| format!("{:.2}", x)),
        state.is_wet(),
        state.can_jump(),
        state.jump_count(),
        state.config().max_jump_count,
        state.current_speed(),
        state.level_cleared(),
        state.end_scene_shown()
    );
}
