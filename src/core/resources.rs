//! Core domain: resources built from the game configuration.

use bevy::prelude::*;

use crate::movement::{ControllerConfig, SoundCue};

/// Controller tuning handed to the player at construction time.
#[derive(Resource, Debug, Clone, Default)]
pub struct ControllerTuning(pub ControllerConfig);

/// Loaded clips for each sound cue. Only inserted when at least one clip is configured.
#[derive(Resource, Debug, Default)]
pub struct PlayerSounds {
    pub jump: Option<Handle<AudioSource>>,
    pub splash: Option<Handle<AudioSource>>,
}

impl PlayerSounds {
    pub fn clip(&self, cue: SoundCue) -> Option<&Handle<AudioSource>> {
        match cue {
            SoundCue::Jump => self.jump.as_ref(),
            SoundCue::Splash => self.splash.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.jump.is_none() && self.splash.is_none()
    }
}
