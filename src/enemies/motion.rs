//! Enemy motion laws.
//!
//! Each enemy carries one `Motion` variant. Once per tick the variant turns
//! the current position into the next one, given a read-only snapshot of
//! the player and the arena bounds.

use std::ops::RangeInclusive;

use bevy::prelude::*;
use rand::Rng;

use super::components::{Enemy, EnemyShape};
use crate::player::Player;
use crate::world::{Arena, ArenaPosition};

/// Per-axis speed range for randomly drawn velocities, in units per tick.
pub const SPEED_RANGE: RangeInclusive<i32> = -3..=3;

/// Per-axis chaser step in units per tick.
pub const CHASE_STEP: f32 = 2.0;

/// Ticks spent on each side of the fencer's square.
pub const FENCE_LEG_TICKS: u32 = 60;

/// Ticks in one full fencer lap.
pub const FENCE_CYCLE_TICKS: u32 = FENCE_LEG_TICKS * 4;

/// Player state visible to enemies during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSnapshot {
    pub position: Vec2,
}

/// How an enemy moves each tick.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Constant velocity, bouncing off the arena walls.
    Wander { velocity: Vec2 },
    /// Steps toward the player on each axis independently.
    Chase,
    /// Walks a closed square: left, up, right, down.
    Fence { tick: u32 },
    /// Moves up and down only, bouncing off the top and bottom walls.
    Door { velocity_y: f32 },
}

impl Motion {
    /// Wanderer with a velocity drawn uniformly per axis from `SPEED_RANGE`.
    pub fn wander(rng: &mut impl Rng) -> Self {
        Self::Wander {
            velocity: Vec2::new(draw_speed(rng), draw_speed(rng)),
        }
    }

    pub fn chase() -> Self {
        Self::Chase
    }

    pub fn fence() -> Self {
        Self::Fence { tick: 0 }
    }

    /// Door with a vertical velocity drawn uniformly from `SPEED_RANGE`.
    pub fn door(rng: &mut impl Rng) -> Self {
        Self::Door {
            velocity_y: draw_speed(rng),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Wander { .. } => "Wanderer",
            Self::Chase => "Chaser",
            Self::Fence { .. } => "Fencer",
            Self::Door { .. } => "Door",
        }
    }

    /// Doors are drawn as rectangles, everything else as ovals.
    pub fn shape(&self) -> EnemyShape {
        match self {
            Self::Door { .. } => EnemyShape::Rectangle,
            _ => EnemyShape::Oval,
        }
    }

    /// Advance one tick and return the new position.
    ///
    /// Bounces flip the velocity after the move, so an enemy can sit past a
    /// wall for one tick before heading back.
    pub fn advance(&mut self, position: Vec2, player: &PlayerSnapshot, arena: &Arena) -> Vec2 {
        match self {
            Self::Wander { velocity } => {
                let next = position + *velocity;
                velocity.x = bounce(next.x, velocity.x, arena.width);
                velocity.y = bounce(next.y, velocity.y, arena.height);
                next
            }
            Self::Chase => Vec2::new(
                step_toward(position.x, player.position.x),
                step_toward(position.y, player.position.y),
            ),
            Self::Fence { tick } => {
                *tick += 1;
                let delta = match *tick {
                    t if t <= FENCE_LEG_TICKS => Vec2::new(-1.0, 0.0),
                    t if t <= FENCE_LEG_TICKS * 2 => Vec2::new(0.0, -1.0),
                    t if t <= FENCE_LEG_TICKS * 3 => Vec2::new(1.0, 0.0),
                    _ => Vec2::new(0.0, 1.0),
                };
                if *tick >= FENCE_CYCLE_TICKS {
                    *tick = 0;
                }
                position + delta
            }
            Self::Door { velocity_y } => {
                let next = Vec2::new(position.x, position.y + *velocity_y);
                *velocity_y = bounce(next.y, *velocity_y, arena.height);
                next
            }
        }
    }
}

fn draw_speed(rng: &mut impl Rng) -> f32 {
    rng.gen_range(SPEED_RANGE) as f32
}

/// Point the velocity back inside [0, upper] once the coordinate has left it.
///
/// Only the sign is forced, so an enemy still outside on the next tick keeps
/// heading inward instead of flipping again.
fn bounce(coordinate: f32, velocity: f32, upper: f32) -> f32 {
    if coordinate > upper {
        -velocity.abs()
    } else if coordinate < 0.0 {
        velocity.abs()
    } else {
        velocity
    }
}

fn step_toward(current: f32, target: f32) -> f32 {
    if current < target {
        current + CHASE_STEP
    } else if current > target {
        current - CHASE_STEP
    } else {
        current
    }
}

/// Move every enemy by its motion law.
///
/// Runs after the collision check, so collisions use the pre-move position.
pub fn advance_enemies(
    arena: Res<Arena>,
    player_query: Query<&ArenaPosition, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<(&mut Motion, &mut ArenaPosition), (With<Enemy>, Without<Player>)>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };
    let snapshot = PlayerSnapshot {
        position: player.0,
    };

    for (mut motion, mut position) in enemy_query.iter_mut() {
        position.0 = motion.advance(position.0, &snapshot, &arena);
    }
}
