//! Game configuration

use serde::Deserialize;

use crate::domain::game::DEFAULT_SHUFFLE_SEED;

/// Game session settings
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Seed for every Higher/Lower question order
    #[serde(default = "default_shuffle_seed")]
    pub shuffle_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            shuffle_seed: default_shuffle_seed(),
        }
    }
}

fn default_shuffle_seed() -> u64 {
    DEFAULT_SHUFFLE_SEED
}
