//! Core domain: camera, configuration loading and shared resources.

pub mod config;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use resources::{ControllerTuning, PlayerSounds};

use bevy::prelude::*;

use crate::core::systems::{load_config, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_config)
            .add_systems(Startup, setup_camera);
    }
}
