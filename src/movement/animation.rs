//! Movement domain: sprite presentation of the animator flags.

use bevy::prelude::*;

use crate::movement::bootstrap::{PLAYER_SIZE, TABBY_COLOR};
use crate::movement::{AnimationFlags, CharacterState, Facing, MovementInput, Player};

const WET_COLOR: Color = Color::srgb(0.55, 0.62, 0.85);

/// Stretch factor while airborne.
const JUMP_STRETCH: Vec2 = Vec2::new(0.85, 1.25);
/// Walk cycle: squash amplitude and frequency (radians per second).
const WALK_BOB: f32 = 0.06;
const WALK_RATE: f32 = 18.0;

pub(crate) fn update_facing(
    input: Res<MovementInput>,
    mut query: Query<&mut Facing, With<Player>>,
) {
    for mut facing in &mut query {
        if input.axis > 0.1 {
            facing.set_if_neq(Facing::Right);
        } else if input.axis < -0.1 {
            facing.set_if_neq(Facing::Left);
        }
    }
}

pub(crate) fn animate_player(
    time: Res<Time>,
    mut query: Query<(&AnimationFlags, &CharacterState, &Facing, &mut Sprite), With<Player>>,
) {
    for (flags, state, facing, mut sprite) in &mut query {
        let scale = if flags.jumping {
            JUMP_STRETCH
        } else if flags.walking {
            let phase = (time.elapsed_secs() * WALK_RATE).sin();
            Vec2::new(1.0 + WALK_BOB * phase, 1.0 - WALK_BOB * phase)
        } else {
            Vec2::ONE
        };

        sprite.custom_size = Some(PLAYER_SIZE * scale);
        sprite.color = if state.is_wet() { WET_COLOR } else { TABBY_COLOR };
        sprite.flip_x = *facing == Facing::Left;
    }
}
