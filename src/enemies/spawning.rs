//! Enemy construction and registration.

use bevy::prelude::*;

use super::components::{Enemy, NeedsVisual};
use super::error::EnemyError;
use super::motion::Motion;
use crate::world::ArenaPosition;

/// A validated enemy, ready to be registered.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemySpawn {
    pub enemy: Enemy,
    pub motion: Motion,
    pub position: Vec2,
}

/// Builds an enemy from size, color and motion, then its starting position.
#[derive(Debug, Clone)]
pub struct EnemyBuilder {
    size: f32,
    color: Color,
    motion: Motion,
    position: Option<Vec2>,
}

impl EnemyBuilder {
    pub fn new(size: f32, color: Color, motion: Motion) -> Self {
        Self {
            size,
            color,
            motion,
            position: None,
        }
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = Some(position);
        self
    }

    /// Validate and produce the spawn.
    pub fn build(self) -> Result<EnemySpawn, EnemyError> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(EnemyError::InvalidSize(self.size));
        }
        let position = self.position.ok_or(EnemyError::MissingPosition)?;

        Ok(EnemySpawn {
            enemy: Enemy::new(self.size, self.color, self.motion.shape()),
            motion: self.motion,
            position,
        })
    }
}

/// Register an enemy in the tick cycle.
///
/// The drawable is created by `create_enemy_visuals` on the next frame.
pub fn add_enemy(commands: &mut Commands, spawn: EnemySpawn) -> Entity {
    let name = Name::new(spawn.motion.label());
    commands
        .spawn((
            spawn.enemy,
            spawn.motion,
            ArenaPosition(spawn.position),
            NeedsVisual,
            name,
        ))
        .id()
}
