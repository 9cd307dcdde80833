//! Game configuration loaded from an external RON file.
//!
//! Allows tweaking arena size, tick rate and spawn timing without
//! recompilation. Every field is optional in the file.

use std::fs;
use std::time::Duration;

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading the game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    Read { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    Parse { path: String, details: String },

    /// Parsed values are out of range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Game configuration loaded from assets/data/game_config.ron.
#[derive(Resource, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Arena
    pub arena_width: f32,
    pub arena_height: f32,
    /// Fixed ticks per second for player and enemy updates
    pub tick_hz: f64,
    // Enemies
    pub spawn_delay_ms: u64,
    pub level: u32,
    /// Seed for spawn randomness; entropy when absent
    pub rng_seed: Option<u64>,
    // Player and home
    /// Player step in arena units per tick
    pub player_speed: f32,
    pub player_start: (f32, f32),
    pub home_position: (f32, f32),
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: 800.0,
            arena_height: 500.0,
            tick_hz: 60.0,
            spawn_delay_ms: 100,
            level: 1,
            rng_seed: None,
            player_speed: 3.0,
            player_start: (50.0, 50.0),
            home_position: (700.0, 420.0),
        }
    }
}

impl GameConfig {
    pub const PATH: &'static str = "assets/data/game_config.ron";

    /// Load game config from the default RON file, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from(Self::PATH) {
            Ok(config) => {
                info!("Loaded game config from {}", Self::PATH);
                config
            }
            Err(e @ ConfigError::Read { .. }) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Read, parse and validate a config file.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        Self::parse(path, &contents)
    }

    /// Parse and validate config contents. `path` is only used in errors.
    pub fn parse(path: &str, contents: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(contents).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.arena_width > 0.0 && self.arena_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "arena must have positive dimensions, got {}x{}",
                self.arena_width, self.arena_height
            )));
        }
        if !(self.tick_hz > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "tick_hz must be positive, got {}",
                self.tick_hz
            )));
        }
        if !(self.player_speed > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "player_speed must be positive, got {}",
                self.player_speed
            )));
        }
        Ok(())
    }

    pub fn spawn_delay(&self) -> Duration {
        Duration::from_millis(self.spawn_delay_ms)
    }

    pub fn player_start(&self) -> Vec2 {
        Vec2::new(self.player_start.0, self.player_start.1)
    }

    pub fn home_position(&self) -> Vec2 {
        Vec2::new(self.home_position.0, self.home_position.1)
    }
}

/// System to load the game config once logging is up.
pub fn load_game_config(mut commands: Commands) {
    let config = GameConfig::load();
    commands.insert_resource(config);
}
