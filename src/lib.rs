//! Turtle Adventure - a 2D chase/avoidance game in Bevy.
//!
//! The player steers a turtle across the arena toward its home while enemies
//! wander, chase, patrol and block the way. Touching any enemy ends the game.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, configuration, randomness
//! - **Player**: The turtle entity and keyboard movement
//! - **Enemies**: Enemy motion laws, collision, visuals, the roster generator
//! - **World**: Arena coordinates, camera, the home landmark
//! - **UI**: Menus, end screens, HUD

pub mod core;
pub mod enemies;
pub mod player;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct TurtleAdventurePlugin;

impl Plugin for TurtleAdventurePlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
