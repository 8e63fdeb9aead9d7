//! Run configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::error::BuildError;

/// Sampling seed when `SAMPLE_SEED` is not set.
const DEFAULT_SEED: u64 = 42;

/// Record inclusion probability when `SAMPLE_PROBABILITY` is not set.
const DEFAULT_PROBABILITY: f64 = 0.0001;

/// Included-game cap when `MAX_GAMES` is not set.
const DEFAULT_MAX_GAMES: u64 = 1000;

#[derive(Clone, Debug)]
pub struct Config {
    /// Registry root; eval files are written under `data/chess/` inside it.
    pub registry_path: PathBuf,

    /// Seed for the sampling generator.
    pub seed: u64,

    /// Probability that any one record is included in the run.
    pub probability: f64,

    /// Stop after this many included games.
    pub max_games: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, BuildError> {
        let registry_path = env::var("REGISTRY_PATH")
            .map_err(|_| BuildError::Config("REGISTRY_PATH not set"))?;

        let seed = env::var("SAMPLE_SEED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SEED);

        let probability = env::var("SAMPLE_PROBABILITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PROBABILITY);

        let max_games = env::var("MAX_GAMES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_GAMES);

        Ok(Self {
            registry_path: PathBuf::from(registry_path),
            seed,
            probability,
            max_games,
        })
    }
}
