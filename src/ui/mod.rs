//! UI domain: level completion overlays.

mod level_clear;
#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::ui::level_clear::{handle_continue, spawn_level_ui, update_continue_button_color};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_level_ui)
            .add_systems(Update, (handle_continue, update_continue_button_color));
    }
}
