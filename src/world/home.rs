//! The home landmark the turtle is trying to reach.

use bevy::prelude::*;

use super::arena::{Arena, ArenaLayer, ArenaPosition};
use crate::core::HomeReached;
use crate::player::Player;

/// Side length of the home square in arena units.
pub const HOME_SIZE: f32 = 40.0;

/// Marker component for the home landmark.
#[derive(Component)]
pub struct Home;

impl Home {
    /// Area the player must enter to win.
    pub fn bounds(center: Vec2) -> Rect {
        Rect::from_center_size(center, Vec2::splat(HOME_SIZE))
    }
}

/// Spawn the home landmark.
pub fn spawn_home(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    arena: &Arena,
    position: Vec2,
) -> Entity {
    commands
        .spawn((
            Home,
            Name::new("Home"),
            ArenaPosition(position),
            ArenaLayer(0.0),
            Mesh2d(meshes.add(Rectangle::new(HOME_SIZE, HOME_SIZE))),
            MeshMaterial2d(materials.add(Color::srgb(0.55, 0.78, 0.45))),
            Transform::from_translation(arena.to_world(position).extend(0.0)),
        ))
        .id()
}

/// Report when the player stands inside the home square.
pub fn detect_home_reached(
    player_query: Query<&ArenaPosition, (With<Player>, Without<Home>)>,
    home_query: Query<&ArenaPosition, (With<Home>, Without<Player>)>,
    mut home_events: EventWriter<HomeReached>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };
    let Ok(home) = home_query.get_single() else {
        return;
    };

    if Home::bounds(home.0).contains(player.0) {
        home_events.send(HomeReached);
    }
}
