//! Core domain: startup systems for camera and configuration.

use bevy::prelude::*;
use std::path::Path;

use crate::core::config::{CONFIG_PATH, GameConfig, SoundConfig, load_game_config};
use crate::core::resources::{ControllerTuning, PlayerSounds};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Load `tabby.ron`, falling back to defaults when it is missing or malformed.
/// Semantic validation happens later, when the player is constructed.
pub(crate) fn load_config(mut commands: Commands, asset_server: Res<AssetServer>) {
    let path = Path::new(CONFIG_PATH);

    let config = if !path.exists() {
        warn!("[CONFIG] {} not found, using default tuning", CONFIG_PATH);
        GameConfig::default()
    } else {
        match load_game_config(path) {
            Ok(config) => {
                info!(
                    "[CONFIG] Loaded {}: speed={}, wet_speed={}, jump_impulse={}, max_jumps={}",
                    CONFIG_PATH,
                    config.controller.base_speed,
                    config.controller.wet_speed,
                    config.controller.jump_impulse,
                    config.controller.max_jump_count
                );
                config
            }
            Err(e) => {
                error!("[CONFIG] {}; using default tuning", e);
                GameConfig::default()
            }
        }
    };

    commands.insert_resource(ControllerTuning(config.controller));

    let sounds = load_sounds(&config.sounds, &asset_server);
    if sounds.is_empty() {
        info!("[AUDIO] No sound cues configured, running silent");
    } else {
        commands.insert_resource(sounds);
    }
}

fn load_sounds(config: &SoundConfig, asset_server: &AssetServer) -> PlayerSounds {
    PlayerSounds {
        jump: config.jump.as_ref().map(|path| asset_server.load(path.clone())),
        splash: config.splash.as_ref().map(|path| asset_server.load(path.clone())),
    }
}
