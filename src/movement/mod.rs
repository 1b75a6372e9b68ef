//! Movement domain: the tabby's controller and the systems that drive it.

mod adapters;
mod animation;
mod bootstrap;
mod components;
mod controller;
mod resources;
mod systems;

pub use components::{AnimationFlags, ContinueListener, Facing, GameLayer, Player, Surface, Zone};
pub use controller::{
    AnimationFlag, AnimationSink, AudioSink, CharacterState, ConfigError, ControllerConfig,
    FrameInput, MovementController, PhysicsBody, SoundCue, SurfaceKind, UiElement, UiSink,
    ViewportProjector, ZoneKind,
};
pub use resources::MovementInput;

pub(crate) use adapters::ControllerParams;

use bevy::prelude::*;

use crate::movement::animation::{animate_player, update_facing};
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{frame_update, handle_contacts, physics_step, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            // UI elements are spawned in Startup; the player checks for them here.
            .add_systems(PostStartup, spawn_player)
            .add_systems(
                Update,
                (read_input, handle_contacts, frame_update).chain(),
            )
            .add_systems(FixedUpdate, physics_step)
            .add_systems(
                Update,
                (update_facing, animate_player).chain().after(frame_update),
            );
    }
}
