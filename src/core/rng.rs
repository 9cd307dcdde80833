//! Shared random source for spawn-time draws.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Random number generator resource.
///
/// Seeded from the config when a seed is given so runs can be replayed;
/// otherwise seeded from OS entropy.
#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(None)
    }
}
