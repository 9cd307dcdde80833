//! Keyboard movement for the turtle.

use bevy::prelude::*;

use super::components::*;
use crate::core::GameConfig;
use crate::world::{Arena, ArenaLayer, ArenaPosition};

/// Build a unit direction from arrow keys / WASD, in arena coordinates (y down).
pub fn input_direction(keyboard: &ButtonInput<KeyCode>) -> Vec2 {
    let mut direction = Vec2::ZERO;
    if keyboard.any_pressed([KeyCode::ArrowUp, KeyCode::KeyW]) {
        direction.y -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::ArrowDown, KeyCode::KeyS]) {
        direction.y += 1.0;
    }
    if keyboard.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]) {
        direction.x -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]) {
        direction.x += 1.0;
    }

    // Normalize to prevent faster diagonal movement
    direction.normalize_or_zero()
}

/// Move the turtle one tick, staying inside the arena.
pub fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
    arena: Res<Arena>,
    mut player_query: Query<&mut ArenaPosition, With<Player>>,
) {
    let Ok(mut position) = player_query.get_single_mut() else {
        return;
    };

    let direction = input_direction(&keyboard);
    if direction == Vec2::ZERO {
        return;
    }

    position.0 = arena.clamp(position.0 + direction * config.player_speed);
}

/// Spawn the player entity.
pub fn spawn_player(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    arena: &Arena,
    position: Vec2,
) -> Entity {
    commands
        .spawn((
            Player,
            Name::new("Turtle"),
            ArenaPosition(position),
            ArenaLayer(2.0),
            Mesh2d(meshes.add(Circle::new(PLAYER_RADIUS))),
            MeshMaterial2d(materials.add(Color::srgb(0.18, 0.55, 0.34))),
            Transform::from_translation(arena.to_world(position).extend(2.0)),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keys_means_no_direction() {
        let keyboard = ButtonInput::<KeyCode>::default();
        assert_eq!(input_direction(&keyboard), Vec2::ZERO);
    }

    #[test]
    fn up_moves_toward_smaller_y() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::ArrowUp);
        assert_eq!(input_direction(&keyboard), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn diagonal_is_normalized() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyD);
        keyboard.press(KeyCode::KeyS);

        let direction = input_direction(&keyboard);
        assert!((direction.length() - 1.0).abs() < 1e-6);
        assert!(direction.x > 0.0 && direction.y > 0.0);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::ArrowLeft);
        keyboard.press(KeyCode::ArrowRight);
        assert_eq!(input_direction(&keyboard), Vec2::ZERO);
    }
}
