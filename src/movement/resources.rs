//! Movement domain: input resource.

use bevy::prelude::*;

use crate::movement::FrameInput;

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Horizontal axis in [-1, 1], held value.
    pub axis: f32,
    pub jump_just_pressed: bool,
}

impl MovementInput {
    pub fn frame(&self) -> FrameInput {
        FrameInput {
            horizontal: self.axis,
            jump_pressed: self.jump_just_pressed,
        }
    }
}
