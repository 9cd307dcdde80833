//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Enemy and player
//! ticks only run in the InGame state, so leaving it freezes the arena.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` to apply the configuration
/// - Move to `MainMenu` when loading completes
/// - Enter `InGame` when the player starts or retries
/// - `Won` when the turtle reaches home
/// - `Lost` when an enemy catches the turtle
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - applying configuration
    #[default]
    Loading,
    /// Main menu / title screen
    MainMenu,
    /// Active gameplay
    InGame,
    /// The turtle made it home
    Won,
    /// The turtle was caught
    Lost,
}

/// Level number the current run was started with.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentLevel(pub u32);

impl Default for CurrentLevel {
    fn default() -> Self {
        Self(1)
    }
}
