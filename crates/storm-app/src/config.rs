//! Host configuration, loaded from a TOML file.
//!
//! A missing file means defaults. A present file that fails to parse or
//! validate is an error, so bad seed data never reaches the tick loop.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use serde::Deserialize;

use storm_core::constants::{DEFAULT_SEED, TICK_INTERVAL_MS};
use storm_core::entity::StormEntity;
use storm_core::enums::ProjectionMode;
use storm_core::types::MapView;
use storm_sim::engine::SimConfig;
use storm_sim::scenario::default_storms;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationSettings,
    pub map: MapView,
    /// Seed storms. Empty means the built-in scenario.
    pub storms: Vec<StormEntity>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub seed: u64,
    pub tick_interval_ms: u64,
    pub projection: ProjectionMode,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            tick_interval_ms: TICK_INTERVAL_MS,
            projection: ProjectionMode::default(),
        }
    }
}

impl AppConfig {
    /// Load from `path`, or from the default location if `None`.
    /// An explicit path must exist; the default path may be absent.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        if !path.exists() {
            if required {
                bail!("config file {} does not exist", path.display());
            }
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content).context("failed to parse TOML")?;
        if config.simulation.tick_interval_ms == 0 {
            bail!("simulation.tick_interval_ms must be positive");
        }
        for storm in &config.storms {
            storm.validate()?;
        }
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("storm-tracker")
            .join("config.toml")
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.simulation.seed,
            projection: self.simulation.projection,
            map_view: self.map,
            tick_interval: self.tick_interval(),
        }
    }

    /// Configured storms, or the built-in scenario if none are given.
    pub fn seed_storms(&self) -> Vec<StormEntity> {
        if self.storms.is_empty() {
            default_storms()
        } else {
            self.storms.clone()
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.simulation.tick_interval_ms)
    }
}
