//! Player/enemy overlap detection.

use bevy::prelude::*;

use super::components::Enemy;
use crate::core::PlayerCaught;
use crate::player::Player;
use crate::world::ArenaPosition;

/// Report every enemy whose bounding box contains the player.
///
/// Box edges count as contact.
pub fn detect_player_collisions(
    player_query: Query<&ArenaPosition, (With<Player>, Without<Enemy>)>,
    enemy_query: Query<(Entity, &Enemy, &ArenaPosition), Without<Player>>,
    mut caught_events: EventWriter<PlayerCaught>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };

    for (entity, enemy, position) in enemy_query.iter() {
        if enemy.bounding_box(position.0).contains(player.0) {
            debug!("Enemy {:?} at {} touched the player", entity, position.0);
            caught_events.send(PlayerCaught { enemy: entity });
        }
    }
}
