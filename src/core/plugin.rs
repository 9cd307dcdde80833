//! Core plugin that sets up game states, events, and fundamental systems.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::config::{load_game_config, GameConfig};
use super::events::*;
use super::rng::GameRng;
use super::states::*;
use crate::world::Arena;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, MainMenu, InGame, Won, Lost)
/// - Global events (PlayerCaught, HomeReached)
/// - The game config and the resources derived from it
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<PlayerCaught>()
            .add_event::<HomeReached>()

            // Loading state - load and apply config, then go to the menu
            .add_systems(
                OnEnter(GameState::Loading),
                (load_game_config, apply_game_config, transition_to_main_menu).chain(),
            )

            // Turn collision reports into end states
            .add_systems(
                Update,
                handle_game_outcome.run_if(in_state(GameState::InGame)),
            );
    }
}

/// Derive arena, level, randomness, tick rate and window size from the config.
fn apply_game_config(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut fixed_time: ResMut<Time<Fixed>>,
    mut window_query: Query<&mut Window, With<PrimaryWindow>>,
) {
    let arena = Arena::new(config.arena_width, config.arena_height);
    if let Ok(mut window) = window_query.get_single_mut() {
        let size = arena.window_size();
        window.resolution.set(size.x, size.y);
    }

    commands.insert_resource(arena);
    commands.insert_resource(CurrentLevel(config.level));
    commands.insert_resource(GameRng::new(config.rng_seed));
    fixed_time.set_timestep_hz(config.tick_hz);

    info!(
        "Arena {}x{}, {} ticks/s, level {}",
        config.arena_width, config.arena_height, config.tick_hz, config.level
    );
}

fn transition_to_main_menu(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::MainMenu);
}

/// Move to Lost on the first catch, or to Won when home is reached.
///
/// A catch in the same tick as reaching home counts as a loss.
fn handle_game_outcome(
    mut caught_events: EventReader<PlayerCaught>,
    mut home_events: EventReader<HomeReached>,
    names: Query<&Name>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let first_catch = caught_events.read().next().copied();
    caught_events.clear();

    if let Some(caught) = first_catch {
        home_events.clear();
        match names.get(caught.enemy) {
            Ok(name) => info!("Turtle caught by {}! Game over.", name),
            Err(_) => info!("Turtle caught! Game over."),
        }
        next_state.set(GameState::Lost);
        return;
    }

    if home_events.read().next().is_some() {
        home_events.clear();
        info!("Turtle reached home!");
        next_state.set(GameState::Won);
    }
}
