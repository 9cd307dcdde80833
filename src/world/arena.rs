//! Arena bounds and the arena coordinate space.
//!
//! Gameplay positions live in arena coordinates: origin at the top-left
//! corner, x to the right, y downward. Rendering maps them onto Bevy's
//! centered, y-up world space.

use bevy::prelude::*;

/// Height of the bands above and below the arena in the window.
/// The top band holds the HUD; the bottom one shows enemies spawned past the floor.
pub const ARENA_MARGIN: f32 = 50.0;

/// The rectangular play area, x in [0, width] and y in [0, height].
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
        }
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert an arena position to a world translation (arena centered on origin).
    pub fn to_world(&self, position: Vec2) -> Vec2 {
        Vec2::new(position.x - self.width / 2.0, self.height / 2.0 - position.y)
    }

    /// Window size that fits the arena plus its top and bottom bands.
    pub fn window_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height + 2.0 * ARENA_MARGIN)
    }

    /// Clamp a position onto the arena rectangle.
    pub fn clamp(&self, position: Vec2) -> Vec2 {
        position.clamp(Vec2::ZERO, Vec2::new(self.width, self.height))
    }
}

/// Position of an entity in arena coordinates.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct ArenaPosition(pub Vec2);

/// Draw layer for an entity rendered from its arena position.
#[derive(Component, Debug, Clone, Copy)]
pub struct ArenaLayer(pub f32);

/// Move every drawn entity to match its arena position.
///
/// Enemies are excluded; they render through their own system once their
/// drawable exists.
pub fn sync_arena_transforms(
    arena: Res<Arena>,
    mut query: Query<
        (&ArenaPosition, &ArenaLayer, &mut Transform),
        Without<crate::enemies::Enemy>,
    >,
) {
    for (position, layer, mut transform) in query.iter_mut() {
        transform.translation = arena.to_world(position.0).extend(layer.0);
    }
}
