//! Player plugin - turtle movement.

use bevy::prelude::*;

use super::movement;
use crate::core::GameState;

/// Player plugin - moves the turtle on the fixed tick.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            movement::player_movement.run_if(in_state(GameState::InGame)),
        );
    }
}
