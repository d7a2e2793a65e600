use std::{fs, path::Path};

use anyhow::Context;
use libgame::{DEFAULT_SEED_ZONE_SIZE, DEFAULT_WORLD_SIZE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub world_size: usize, // Side length of the square world.
    pub seed_zone_size: usize, // Side length of the randomly seeded square in its middle.

    /// Fixes the random seed zone so a run can be replayed. Seeded from the OS when absent.
    pub rng_seed: Option<u64>,
}

impl Config {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        let config =
            serde_json::from_slice(&config_serialized).context("Couldn't deserialize config")?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_size: DEFAULT_WORLD_SIZE,
            seed_zone_size: DEFAULT_SEED_ZONE_SIZE,
            rng_seed: None,
        }
    }
}
