//! World module - arena coordinates, camera and the home landmark.

mod arena;
mod home;
mod plugin;

pub use arena::{sync_arena_transforms, Arena, ArenaLayer, ArenaPosition, ARENA_MARGIN};
pub use home::{detect_home_reached, Home, HOME_SIZE};
pub use plugin::{setup_level, WorldPlugin};
