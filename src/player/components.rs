//! Player-related components.

use bevy::prelude::*;

/// Marker component for the player entity (the turtle).
#[derive(Component)]
pub struct Player;

/// Radius of the turtle's drawn body in arena units.
pub const PLAYER_RADIUS: f32 = 8.0;
