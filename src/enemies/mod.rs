//! Enemies module - enemy entities, motion laws, collision and spawning.

mod collision;
mod components;
mod error;
mod generator;
mod motion;
mod plugin;
mod spawning;
mod visuals;

pub use collision::detect_player_collisions;
pub use components::*;
pub use error::EnemyError;
pub use generator::EnemyGenerator;
pub use motion::{advance_enemies, Motion, PlayerSnapshot};
pub use plugin::EnemyPlugin;
pub use spawning::{add_enemy, EnemyBuilder, EnemySpawn};
