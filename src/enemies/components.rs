//! Enemy-related components.

use bevy::prelude::*;

/// Shape of an enemy's drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyShape {
    Oval,
    Rectangle,
}

/// Shared enemy data: every variant is this component plus a `Motion`.
///
/// Size and color are fixed once the enemy is built.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Enemy {
    size: f32,
    color: Color,
    shape: EnemyShape,
}

impl Enemy {
    /// Construction goes through `EnemyBuilder`, which validates the size.
    pub(super) fn new(size: f32, color: Color, shape: EnemyShape) -> Self {
        Self { size, color, shape }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn shape(&self) -> EnemyShape {
        self.shape
    }

    /// Axis-aligned box of half-extent `size / 2` centered on `position`.
    pub fn bounding_box(&self, position: Vec2) -> Rect {
        Rect::from_center_size(position, Vec2::splat(self.size))
    }
}

/// Marker for enemies registered but not yet given a drawable.
/// Added by `add_enemy`, removed once the mesh is created.
#[derive(Component)]
pub struct NeedsVisual;
