//! Player module - the turtle entity and its movement.

mod components;
mod movement;
mod plugin;

pub use components::*;
pub use movement::{input_direction, player_movement, spawn_player};
pub use plugin::PlayerPlugin;
