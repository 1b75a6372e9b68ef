//! Movement domain: ECS implementations of the controller's collaborators.

use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::core::PlayerSounds;
use crate::movement::{
    AnimationFlag, AnimationFlags, AnimationSink, AudioSink, CharacterState, MovementController,
    PhysicsBody, Player, SoundCue, UiElement, UiSink, ViewportProjector,
};

/// Borrowed view of the player's rigid body.
pub(crate) struct RigidBodyHandle<'a> {
    pub position: Vec2,
    pub velocity: &'a mut LinearVelocity,
    pub mass: f32,
}

impl PhysicsBody for RigidBodyHandle<'_> {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_horizontal_velocity(&mut self, vx: f32) {
        self.velocity.x = vx;
    }

    fn apply_vertical_impulse(&mut self, impulse: f32) {
        debug_assert!(self.mass > 0.0, "player mass must be positive");
        self.velocity.y += impulse / self.mass;
    }
}

pub(crate) struct FlagAnimator<'a>(pub &'a mut AnimationFlags);

impl AnimationSink for FlagAnimator<'_> {
    fn set_flag(&mut self, flag: AnimationFlag, value: bool) {
        self.0.set(flag, value);
    }
}

/// Plays configured clips as fire-and-forget audio entities.
pub(crate) struct ClipPlayer<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub sounds: &'a PlayerSounds,
}

impl AudioSink for ClipPlayer<'_, '_, '_> {
    fn play(&mut self, cue: SoundCue) {
        let Some(clip) = self.sounds.clip(cue) else {
            return;
        };

        self.commands
            .spawn((AudioPlayer::new(clip.clone()), PlaybackSettings::DESPAWN));
    }
}

pub(crate) type UiElementQuery<'w, 's> =
    Query<'w, 's, (&'static UiElement, &'static mut Visibility)>;

/// Shows and hides level UI by toggling `Visibility` on tagged nodes.
pub(crate) struct VisibilityUi<'a, 'w, 's> {
    pub elements: &'a mut UiElementQuery<'w, 's>,
}

impl UiSink for VisibilityUi<'_, '_, '_> {
    fn set_visible(&mut self, element: UiElement, visible: bool) {
        let target = if visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };

        for (tag, mut visibility) in self.elements.iter_mut() {
            if *tag == element {
                visibility.set_if_neq(target);
            }
        }
    }
}

/// Projects through the 2D camera; yields nothing until a camera is ready.
pub(crate) struct CameraProjector<'a> {
    pub camera: Option<(&'a Camera, &'a GlobalTransform)>,
}

impl ViewportProjector for CameraProjector<'_> {
    fn world_to_viewport(&self, world: Vec2) -> Option<Vec2> {
        let (camera, camera_transform) = self.camera?;
        let ndc = camera.world_to_ndc(camera_transform, world.extend(0.0))?;
        Some(ndc_to_viewport(ndc))
    }
}

/// NDC ([-1, 1], y up) to normalized viewport ([0, 1], origin bottom-left).
pub(crate) fn ndc_to_viewport(ndc: Vec3) -> Vec2 {
    Vec2::new((ndc.x + 1.0) * 0.5, (ndc.y + 1.0) * 0.5)
}

type PlayerRig = (
    Entity,
    &'static mut CharacterState,
    &'static Transform,
    &'static mut LinearVelocity,
    &'static Mass,
    &'static mut AnimationFlags,
);

/// Everything needed to assemble a [`MovementController`] inside a system.
#[derive(SystemParam)]
pub(crate) struct ControllerParams<'w, 's> {
    commands: Commands<'w, 's>,
    players: Query<'w, 's, PlayerRig, With<Player>>,
    ui: UiElementQuery<'w, 's>,
    sounds: Option<Res<'w, PlayerSounds>>,
}

impl ControllerParams<'_, '_> {
    pub fn player(&self) -> Option<Entity> {
        self.players.iter().next().map(|(entity, ..)| entity)
    }

    pub fn is_player(&self, entity: Entity) -> bool {
        self.players.contains(entity)
    }

    pub fn is_shown(&self, element: UiElement) -> bool {
        self.ui
            .iter()
            .any(|(tag, visibility)| *tag == element && *visibility != Visibility::Hidden)
    }

    /// Run `f` against the controller of `player`. Returns `None` if it is not a player.
    pub fn drive<R>(
        &mut self,
        player: Entity,
        f: impl FnOnce(&mut MovementController<'_>) -> R,
    ) -> Option<R> {
        let Ok((_, mut state, transform, mut velocity, mass, mut flags)) =
            self.players.get_mut(player)
        else {
            return None;
        };

        let mut body = RigidBodyHandle {
            position: transform.translation.truncate(),
            velocity: &mut *velocity,
            mass: mass.0,
        };
        let mut animator = FlagAnimator(&mut *flags);
        let mut ui = VisibilityUi {
            elements: &mut self.ui,
        };
        let mut audio = self.sounds.as_deref().map(|sounds| ClipPlayer {
            commands: &mut self.commands,
            sounds,
        });

        let mut controller =
            MovementController::new(&mut *state, &mut body, &mut animator, &mut ui)
                .with_audio(audio.as_mut().map(|clips| clips as &mut dyn AudioSink));

        Some(f(&mut controller))
    }

    /// Run `f` against the single player's controller, if one exists.
    pub fn drive_player<R>(
        &mut self,
        f: impl FnOnce(&mut MovementController<'_>) -> R,
    ) -> Option<R> {
        let player = self.player()?;
        self.drive(player, f)
    }
}
