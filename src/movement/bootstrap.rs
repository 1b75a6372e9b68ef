//! Movement domain: player construction with fail-fast collaborator checks.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::ControllerTuning;
use crate::movement::{
    AnimationFlags, CharacterState, ContinueListener, Facing, GameLayer, Player, UiElement,
};

pub const PLAYER_SIZE: Vec2 = Vec2::new(40.0, 28.0);
pub const PLAYER_SPAWN: Vec3 = Vec3::new(-520.0, -200.0, 1.0);

pub(crate) const TABBY_COLOR: Color = Color::srgb(0.93, 0.62, 0.3);

/// A required collaborator was never set up.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    MissingTuning,
    MissingUiElement(UiElement),
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::MissingTuning => write!(f, "controller tuning was not loaded"),
            SetupError::MissingUiElement(element) => {
                write!(f, "required UI element {:?} was not spawned", element)
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Every UI element the controller drives must exist before the player does.
pub(crate) fn check_ui_elements(
    present: impl IntoIterator<Item = UiElement>,
) -> Result<(), SetupError> {
    let present: Vec<UiElement> = present.into_iter().collect();
    match UiElement::ALL
        .into_iter()
        .find(|required| !present.contains(required))
    {
        Some(missing) => Err(SetupError::MissingUiElement(missing)),
        None => Ok(()),
    }
}

/// Spawn the tabby. Any error here is fatal: the game cannot run without a
/// valid controller.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Option<Res<ControllerTuning>>,
    ui_elements: Query<&UiElement>,
    existing_player: Query<Entity, With<Player>>,
) -> Result {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return Ok(());
    }

    let tuning = tuning.ok_or(SetupError::MissingTuning)?;
    check_ui_elements(ui_elements.iter().copied())?;
    let state = CharacterState::new(tuning.0)?;

    info!(
        "Spawning player: speed={}, wet_speed={}, jump_impulse={}, max_jumps={}",
        state.config().base_speed,
        state.config().wet_speed,
        state.config().jump_impulse,
        state.config().max_jump_count
    );

    commands.spawn((
        // Identity & controller
        (
            Player,
            state,
            AnimationFlags::default(),
            Facing::default(),
            ContinueListener,
        ),
        // Rendering
        Sprite {
            color: TABBY_COLOR,
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            Mass(1.0),
            NoAutoMass,
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Obstacle, GameLayer::Sensor],
            ),
        ),
    ));

    Ok(())
}
