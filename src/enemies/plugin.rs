//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::{collision, generator, motion, visuals};
use crate::core::GameState;
use crate::player::player_movement;

/// Enemy plugin - handles the spawn schedule, motion, collision and drawables.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app
            // Schedule the roster when a run starts, tear everything down when it ends
            .add_systems(OnEnter(GameState::InGame), generator::schedule_enemy_generator)
            .add_systems(
                OnExit(GameState::InGame),
                (generator::cancel_enemy_generator, visuals::delete_enemies),
            )
            // Collision is checked before the move, after the player has moved
            .add_systems(
                FixedUpdate,
                (collision::detect_player_collisions, motion::advance_enemies)
                    .chain()
                    .after(player_movement)
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(
                Update,
                (
                    generator::run_enemy_generator,
                    visuals::create_enemy_visuals,
                    visuals::render_enemies,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
