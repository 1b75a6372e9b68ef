//! Movement domain: per-frame and fixed-step controller updates.

use bevy::prelude::*;

use crate::movement::MovementInput;
use crate::movement::adapters::{CameraProjector, ControllerParams};

/// Once per rendered frame: walk flag, jump edge, level boundary.
pub(crate) fn frame_update(
    input: Res<MovementInput>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut controllers: ControllerParams,
) {
    let projector = CameraProjector {
        camera: cameras.single().ok(),
    };
    let frame = input.frame();

    controllers.drive_player(|controller| controller.on_frame_update(frame, &projector));
}

/// Once per fixed physics step: horizontal velocity from the held axis.
pub(crate) fn physics_step(input: Res<MovementInput>, mut controllers: ControllerParams) {
    let horizontal = input.axis;
    controllers.drive_player(|controller| controller.on_physics_step(horizontal));
}
