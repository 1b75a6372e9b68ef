//! Movement domain: system modules for the tabby's controller.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::handle_contacts;
pub(crate) use input::read_input;
pub(crate) use movement::{frame_update, physics_step};
