//! Movement domain: components and physics layers for the tabby and its level.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{AnimationFlag, SurfaceKind, ZoneKind};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground and window sills
    Ground,
    /// Crates and other solid props that do not restore jumps
    Obstacle,
    /// The tabby
    Player,
    /// Puddles and other triggers - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Collider the character can land on or bump into.
#[derive(Component, Debug, Clone, Copy)]
pub struct Surface(pub SurfaceKind);

/// Trigger region the character can overlap.
#[derive(Component, Debug, Clone, Copy)]
pub struct Zone(pub ZoneKind);

/// Subscription to continue-button confirmations. Released with the entity.
#[derive(Component, Debug)]
pub struct ContinueListener;

/// Animator parameters written by the controller, read by presentation systems.
#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct AnimationFlags {
    pub walking: bool,
    pub jumping: bool,
}

impl AnimationFlags {
    pub fn set(&mut self, flag: AnimationFlag, value: bool) {
        match flag {
            AnimationFlag::Walking => self.walking = value,
            AnimationFlag::Jumping => self.jumping = value,
        }
    }
}

/// Which way the sprite faces; kept when input goes idle.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}
