//! Core game module - states, events, configuration and randomness.
//!
//! This module provides the foundation that all other game systems build upon.

mod config;
mod events;
mod plugin;
mod rng;
mod states;

pub use config::{load_game_config, ConfigError, GameConfig};
pub use events::*;
pub use plugin::CorePlugin;
pub use rng::GameRng;
pub use states::*;
