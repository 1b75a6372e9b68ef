//! Movement domain: surface contacts and puddle overlaps.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::adapters::ControllerParams;
use crate::movement::{Surface, Zone};

/// Forward collision messages that involve the player to its controller.
pub(crate) fn handle_contacts(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    surfaces: Query<&Surface>,
    zones: Query<&Zone>,
    mut controllers: ControllerParams,
) {
    for event in collision_start_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player, other) in pairs {
            if !controllers.is_player(player) {
                continue;
            }

            if let Ok(surface) = surfaces.get(other) {
                controllers.drive(player, |controller| controller.on_surface_contact(surface.0));
            }

            if let Ok(zone) = zones.get(other) {
                controllers.drive(player, |controller| controller.on_enter_zone(zone.0));
            }
        }
    }

    for event in collision_end_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player, other) in pairs {
            if !controllers.is_player(player) {
                continue;
            }

            if let Ok(zone) = zones.get(other) {
                controllers.drive(player, |controller| controller.on_exit_zone(zone.0));
            }
        }
    }
}
