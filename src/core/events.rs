//! Global events used for cross-system communication.
//!
//! Enemy and world systems only report what happened; the core plugin
//! decides how the game reacts.

use bevy::prelude::*;

/// Sent when the player's position lies inside an enemy's bounding box.
///
/// One event is sent per colliding enemy per tick.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerCaught {
    /// Enemy whose bounding box contained the player
    pub enemy: Entity,
}

/// Sent when the player's position lies inside the home landmark.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeReached;
