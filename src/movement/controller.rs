//! Movement domain: the tabby's run/jump/wet state machine.
//!
//! The controller never reaches into the engine. Every side effect goes through one of
//! the collaborator traits below, which the host implements on top of its physics,
//! animation, audio and UI layers (see `adapters`).

use bevy::prelude::*;
use serde::Deserialize;

/// Axis magnitudes at or below this do not count as walking.
const WALK_THRESHOLD: f32 = 0.01;

fn default_max_jump_count() -> u32 {
    2
}

/// Construction-time tuning, fixed for the play session.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ControllerConfig {
    /// Horizontal speed while dry.
    pub base_speed: f32,
    /// Horizontal speed while standing in a puddle.
    pub wet_speed: f32,
    /// Vertical impulse applied on each jump.
    pub jump_impulse: f32,
    /// Jumps allowed per ground contact (2 = double jump).
    #[serde(default = "default_max_jump_count")]
    pub max_jump_count: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            base_speed: 250.0,
            wet_speed: 125.0,
            jump_impulse: 480.0,
            max_jump_count: default_max_jump_count(),
        }
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("base_speed", self.base_speed),
            ("wet_speed", self.wet_speed),
            ("jump_impulse", self.jump_impulse),
        ] {
            // Also rejects NaN.
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.max_jump_count == 0 {
            return Err(ConfigError::NoJumpBudget);
        }

        Ok(())
    }
}

/// Invalid controller tuning.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NotPositive { field: &'static str, value: f32 },
    NoJumpBudget,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotPositive { field, value } => {
                write!(f, "{} must be a positive number, got {}", field, value)
            }
            ConfigError::NoJumpBudget => write!(f, "max_jump_count must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Everything the controller knows about the character.
///
/// Fields are private to this module: only [`MovementController`] mutates them.
#[derive(Component, Debug, Clone)]
pub struct CharacterState {
    config: ControllerConfig,
    is_wet: bool,
    can_jump: bool,
    jump_count: u32,
    level_cleared: bool,
    end_scene_shown: bool,
}

impl CharacterState {
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            is_wet: false,
            can_jump: true,
            jump_count: 0,
            level_cleared: false,
            end_scene_shown: false,
        })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn is_wet(&self) -> bool {
        self.is_wet
    }

    #[cfg(any(test, feature = "dev-tools"))]
    pub fn can_jump(&self) -> bool {
        self.can_jump
    }

    #[cfg(any(test, feature = "dev-tools"))]
    pub fn jump_count(&self) -> u32 {
        self.jump_count
    }

    #[cfg(any(test, feature = "dev-tools"))]
    pub fn level_cleared(&self) -> bool {
        self.level_cleared
    }

    #[cfg(any(test, feature = "dev-tools"))]
    pub fn end_scene_shown(&self) -> bool {
        self.end_scene_shown
    }

    /// Horizontal speed for the current wetness.
    pub fn current_speed(&self) -> f32 {
        if self.is_wet {
            self.config.wet_speed
        } else {
            self.config.base_speed
        }
    }

    /// Jump gate, re-evaluated on every press.
    pub fn jump_allowed(&self) -> bool {
        self.can_jump && self.jump_count < self.config.max_jump_count && !self.is_wet
    }
}

/// Rigid body the controller steers. Vertical integration stays with the body.
pub trait PhysicsBody {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn set_horizontal_velocity(&mut self, vx: f32);
    fn apply_vertical_impulse(&mut self, impulse: f32);
}

/// Boolean animation parameters understood by the character's animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationFlag {
    Walking,
    Jumping,
}

impl AnimationFlag {
    pub fn name(self) -> &'static str {
        match self {
            AnimationFlag::Walking => "isWalking",
            AnimationFlag::Jumping => "isJumping",
        }
    }
}

pub trait AnimationSink {
    fn set_flag(&mut self, flag: AnimationFlag, value: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Jump,
    Splash,
}

pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// UI elements driven by level completion.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiElement {
    LevelClearedPanel,
    ContinueButton,
    EndScene,
}

impl UiElement {
    pub const ALL: [UiElement; 3] = [
        UiElement::LevelClearedPanel,
        UiElement::ContinueButton,
        UiElement::EndScene,
    ];
}

pub trait UiSink {
    fn set_visible(&mut self, element: UiElement, visible: bool);
}

/// World to normalized viewport transform: (0, 0) is bottom-left, (1, 1) top-right.
pub trait ViewportProjector {
    /// `None` when the projection is not available yet.
    fn world_to_viewport(&self, world: Vec2) -> Option<Vec2>;
}

/// Surfaces the character can collide with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    Ground,
    WindowSill,
    Obstacle,
}

impl SurfaceKind {
    /// Ground-like surfaces restore the jump budget on contact.
    pub fn is_ground_like(self) -> bool {
        matches!(self, SurfaceKind::Ground | SurfaceKind::WindowSill)
    }
}

/// Trigger regions the character can overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneKind {
    Puddle,
}

impl ZoneKind {
    pub fn is_wet(self) -> bool {
        matches!(self, ZoneKind::Puddle)
    }
}

/// Input sampled once per rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Horizontal axis in [-1, 1].
    pub horizontal: f32,
    /// True only on the frame the jump key went down.
    pub jump_pressed: bool,
}

/// Drives a [`CharacterState`] through borrowed collaborators.
///
/// The collaborators are not owned: the host lends them for the duration of a call
/// batch. Audio is optional and its absence is a silent no-op.
pub struct MovementController<'a> {
    state: &'a mut CharacterState,
    body: &'a mut dyn PhysicsBody,
    animator: &'a mut dyn AnimationSink,
    ui: &'a mut dyn UiSink,
    audio: Option<&'a mut dyn AudioSink>,
}

impl<'a> MovementController<'a> {
    pub fn new(
        state: &'a mut CharacterState,
        body: &'a mut dyn PhysicsBody,
        animator: &'a mut dyn AnimationSink,
        ui: &'a mut dyn UiSink,
    ) -> Self {
        Self {
            state,
            body,
            animator,
            ui,
            audio: None,
        }
    }

    pub fn with_audio(mut self, audio: Option<&'a mut dyn AudioSink>) -> Self {
        self.audio = audio;
        self
    }

    pub fn state(&self) -> &CharacterState {
        self.state
    }

    /// Per-frame update: walk animation, jump on a press edge, level boundary check.
    pub fn on_frame_update(&mut self, input: FrameInput, projector: &dyn ViewportProjector) {
        self.animator
            .set_flag(AnimationFlag::Walking, input.horizontal.abs() > WALK_THRESHOLD);

        if input.jump_pressed {
            if self.state.jump_allowed() {
                self.jump();
            } else {
                debug!(
                    "[JUMP] Rejected: can_jump={}, wet={}, jumps={}/{}",
                    self.state.can_jump,
                    self.state.is_wet,
                    self.state.jump_count,
                    self.state.config.max_jump_count
                );
            }
        }

        self.on_level_boundary_reached(projector);
    }

    /// Fixed-step update: set horizontal velocity, leave vertical velocity to the body.
    pub fn on_physics_step(&mut self, horizontal: f32) {
        let speed = self.state.current_speed();
        self.body
            .set_horizontal_velocity(horizontal.clamp(-1.0, 1.0) * speed);
    }

    fn jump(&mut self) {
        let vy_before = self.body.velocity().y;
        self.body.apply_vertical_impulse(self.state.config.jump_impulse);
        self.animator.set_flag(AnimationFlag::Jumping, true);
        self.state.jump_count += 1;

        if let Some(audio) = self.audio.as_mut() {
            audio.play(SoundCue::Jump);
        }

        debug!(
            "[JUMP] Jump {}/{} from vy={:.1}",
            self.state.jump_count, self.state.config.max_jump_count, vy_before
        );
    }

    /// Contact with a ground-like surface restores the full jump budget.
    pub fn on_ground_contact(&mut self) {
        self.state.can_jump = true;
        self.state.jump_count = 0;
        self.animator.set_flag(AnimationFlag::Jumping, false);
        trace!("[GROUND] Jump budget restored");
    }

    pub fn on_enter_wet_zone(&mut self) {
        self.state.is_wet = true;
        self.state.can_jump = false;

        if let Some(audio) = self.audio.as_mut() {
            audio.play(SoundCue::Splash);
        }

        debug!("[WET] Entered puddle, jumping disabled");
    }

    /// Re-enables jumping even when airborne; see DESIGN.md.
    pub fn on_exit_wet_zone(&mut self) {
        self.state.is_wet = false;
        self.state.can_jump = true;
        debug!("[WET] Left puddle, jumping enabled");
    }

    /// Collision dispatch by surface kind.
    pub fn on_surface_contact(&mut self, surface: SurfaceKind) {
        if surface.is_ground_like() {
            self.on_ground_contact();
        }
    }

    pub fn on_enter_zone(&mut self, zone: ZoneKind) {
        if zone.is_wet() {
            self.on_enter_wet_zone();
        }
    }

    pub fn on_exit_zone(&mut self, zone: ZoneKind) {
        if zone.is_wet() {
            self.on_exit_wet_zone();
        }
    }

    /// Latches level completion once the character is past the right viewport edge.
    /// Returns true on the call that latched.
    pub fn on_level_boundary_reached(&mut self, projector: &dyn ViewportProjector) -> bool {
        if self.state.level_cleared {
            return false;
        }

        let Some(viewport) = projector.world_to_viewport(self.body.position()) else {
            return false;
        };

        if viewport.x <= 1.0 {
            return false;
        }

        self.state.level_cleared = true;
        self.ui.set_visible(UiElement::LevelClearedPanel, true);
        self.ui.set_visible(UiElement::ContinueButton, true);
        info!("[LEVEL] Level cleared at viewport x={:.2}", viewport.x);
        true
    }

    /// Swap the level-cleared UI for the end scene. Repeated calls change nothing.
    pub fn on_continue_confirmed(&mut self) {
        if self.state.end_scene_shown {
            return;
        }

        self.ui.set_visible(UiElement::EndScene, true);
        self.ui.set_visible(UiElement::LevelClearedPanel, false);
        self.ui.set_visible(UiElement::ContinueButton, false);
        self.state.end_scene_shown = true;
        info!("[LEVEL] End scene shown");
    }
}
