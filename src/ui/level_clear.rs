//! UI domain: level-cleared panel, continue button and end scene.

use bevy::prelude::*;

use crate::movement::{ContinueListener, ControllerParams, Player, UiElement};

const BUTTON_IDLE: Color = Color::srgb(0.2, 0.2, 0.25);
const BUTTON_HOVER: Color = Color::srgb(0.3, 0.3, 0.38);

/// Spawn the three level UI elements, all hidden until the controller asks for them.
pub(crate) fn spawn_level_ui(mut commands: Commands) {
    // Level cleared banner
    commands
        .spawn((
            UiElement::LevelClearedPanel,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Percent(25.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            Visibility::Hidden,
            ZIndex(50),
        ))
        .with_child((
            Text::new("LEVEL CLEARED"),
            TextFont {
                font_size: 64.0,
                ..default()
            },
            TextColor(Color::srgb(0.95, 0.85, 0.3)),
        ));

    // Continue button
    commands
        .spawn((
            UiElement::ContinueButton,
            Button,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Percent(55.0),
                left: Val::Percent(50.0),
                margin: UiRect::left(Val::Px(-90.0)),
                width: Val::Px(180.0),
                padding: UiRect::axes(Val::Px(24.0), Val::Px(12.0)),
                border: UiRect::all(Val::Px(2.0)),
                justify_content: JustifyContent::Center,
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
            BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
            Visibility::Hidden,
            ZIndex(60),
        ))
        .with_child((
            Text::new("CONTINUE"),
            TextFont {
                font_size: 28.0,
                ..default()
            },
            TextColor(Color::srgb(0.9, 0.9, 0.9)),
        ));

    // End scene overlay
    commands
        .spawn((
            UiElement::EndScene,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.02, 0.05, 0.1, 0.95)),
            Visibility::Hidden,
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("THE END"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.85, 0.3)),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("The tabby made it home dry... mostly."),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.7)),
            ));
        });
}

/// Confirm continue by clicking the button or pressing Enter while it is shown.
pub(crate) fn handle_continue(
    keyboard: Res<ButtonInput<KeyCode>>,
    button_query: Query<(&Interaction, &UiElement), Changed<Interaction>>,
    listeners: Query<Entity, (With<Player>, With<ContinueListener>)>,
    mut controllers: ControllerParams,
) {
    let should_continue = keyboard.just_pressed(KeyCode::Enter)
        || keyboard.just_pressed(KeyCode::NumpadEnter)
        || button_query.iter().any(|(interaction, element)| {
            *element == UiElement::ContinueButton && *interaction == Interaction::Pressed
        });

    if !should_continue || !controllers.is_shown(UiElement::ContinueButton) {
        return;
    }

    for listener in &listeners {
        controllers.drive(listener, |controller| controller.on_continue_confirmed());
    }
}

pub(crate) fn update_continue_button_color(
    mut button_query: Query<(&Interaction, &UiElement, &mut BackgroundColor), Changed<Interaction>>,
) {
    for (interaction, element, mut background) in &mut button_query {
        if *element != UiElement::ContinueButton {
            continue;
        }

        background.0 = match interaction {
            Interaction::Hovered | Interaction::Pressed => BUTTON_HOVER,
            Interaction::None => BUTTON_IDLE,
        };
    }
}
