//! World plugin - camera, level setup and the home landmark.

use bevy::prelude::*;

use super::arena::{sync_arena_transforms, Arena};
use super::home::{detect_home_reached, spawn_home, Home};
use crate::core::{GameConfig, GameState};
use crate::player::{player_movement, spawn_player, Player};

/// World plugin - handles the camera and level setup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Arena>()
            .add_systems(Startup, spawn_camera)
            .add_systems(OnEnter(GameState::InGame), setup_level)
            .add_systems(OnExit(GameState::InGame), cleanup_level)
            .add_systems(
                FixedUpdate,
                detect_home_reached
                    .after(player_movement)
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(
                Update,
                sync_arena_transforms.run_if(in_state(GameState::InGame)),
            );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Set up the level: home landmark and player.
pub fn setup_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    arena: Res<Arena>,
    config: Res<GameConfig>,
) {
    info!("Building level");

    spawn_home(
        &mut commands,
        &mut meshes,
        &mut materials,
        &arena,
        config.home_position(),
    );
    spawn_player(
        &mut commands,
        &mut meshes,
        &mut materials,
        &arena,
        config.player_start(),
    );
}

/// Clean up level entities when leaving InGame state.
fn cleanup_level(
    mut commands: Commands,
    home_query: Query<Entity, With<Home>>,
    player_query: Query<Entity, With<Player>>,
) {
    for entity in home_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    for entity in player_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
