//! UI domain: tests for level UI setup and continue handling.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::level_clear::{handle_continue, spawn_level_ui};
use crate::movement::{
    AnimationFlags, CharacterState, ContinueListener, ControllerConfig, Player, UiElement,
};

fn level_ui_app() -> (App, Entity) {
    let mut app = App::new();
    app.init_resource::<ButtonInput<KeyCode>>()
        .add_systems(Startup, spawn_level_ui)
        .add_systems(Update, handle_continue);

    let player = app
        .world_mut()
        .spawn((
            Player,
            ContinueListener,
            CharacterState::new(ControllerConfig::default()).unwrap(),
            Transform::default(),
            LinearVelocity::ZERO,
            Mass(1.0),
            AnimationFlags::default(),
        ))
        .id();

    (app, player)
}

fn visibility_of(app: &mut App, element: UiElement) -> Visibility {
    let world = app.world_mut();
    let mut query = world.query::<(&UiElement, &Visibility)>();
    query
        .iter(world)
        .find(|(tag, _)| **tag == element)
        .map(|(_, visibility)| *visibility)
        .unwrap()
}

fn show(app: &mut App, element: UiElement) {
    let world = app.world_mut();
    let mut query = world.query::<(&UiElement, &mut Visibility)>();
    for (tag, mut visibility) in query.iter_mut(world) {
        if *tag == element {
            *visibility = Visibility::Visible;
        }
    }
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

#[test]
fn test_level_ui_starts_hidden() {
    let (mut app, _) = level_ui_app();
    app.update();

    let world = app.world_mut();
    let mut query = world.query::<(&UiElement, &Visibility)>();
    let mut seen: Vec<UiElement> = Vec::new();
    for (element, visibility) in query.iter(world) {
        assert_eq!(*visibility, Visibility::Hidden, "{:?} should start hidden", element);
        seen.push(*element);
    }

    assert_eq!(seen.len(), UiElement::ALL.len());
    for element in UiElement::ALL {
        assert!(seen.contains(&element));
    }
}

#[test]
fn test_enter_ignored_while_continue_hidden() {
    let (mut app, player) = level_ui_app();
    app.update();

    press(&mut app, KeyCode::Enter);
    app.update();

    for element in UiElement::ALL {
        assert_eq!(visibility_of(&mut app, element), Visibility::Hidden);
    }
    let state = app.world().get::<CharacterState>(player).unwrap();
    assert!(!state.end_scene_shown());
}

#[test]
fn test_numpad_enter_continues_once_button_shown() {
    let (mut app, player) = level_ui_app();
    app.update();
    show(&mut app, UiElement::LevelClearedPanel);
    show(&mut app, UiElement::ContinueButton);

    press(&mut app, KeyCode::NumpadEnter);
    app.update();

    assert_eq!(visibility_of(&mut app, UiElement::EndScene), Visibility::Visible);
    assert_eq!(
        visibility_of(&mut app, UiElement::LevelClearedPanel),
        Visibility::Hidden
    );
    assert_eq!(
        visibility_of(&mut app, UiElement::ContinueButton),
        Visibility::Hidden
    );
    let state = app.world().get::<CharacterState>(player).unwrap();
    assert!(state.end_scene_shown());
}
