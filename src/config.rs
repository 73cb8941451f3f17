//! Driver configuration.
//!
//! Everything the headless driver needs to build a world and a flock. The
//! flocking rules themselves are not configurable; see [`crate::constants`].
//! Configuration is read from JSON and every field has a default, so an
//! empty object is a valid file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flock::NeighbourPolicy;
use crate::spawn::SpawnConfig;
use crate::terrain::MIN_GRID_SIZE;

/// Fraction of `z_scale` used as the default sea level.
pub const DEFAULT_SEA_LEVEL_FRACTION: f32 = 0.25;

/// Errors raised while loading or validating a [`SimulationConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid configuration JSON.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value the simulation cannot use.
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Settings for a headless simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// How the initial flock is scattered.
    pub spawn: SpawnConfig,
    /// Samples per side of the square procedural heightfield.
    pub terrain_size: usize,
    /// World units per terrain cell.
    pub xy_scale: f32,
    /// Height of the tallest procedural peak.
    pub z_scale: f32,
    /// Water surface height. Defaults to a quarter of `z_scale`.
    pub sea_level: Option<f32>,
    /// Seed for both the terrain and the flock.
    pub seed: u64,
    /// Seconds per tick.
    pub dt: f32,
    /// Number of ticks to run.
    pub ticks: u64,
    /// Whether boids may select themselves as their closest neighbour.
    pub neighbour_policy: NeighbourPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            spawn: SpawnConfig::default(),
            terrain_size: 129,
            xy_scale: 1.0,
            z_scale: 32.0,
            sea_level: None,
            seed: 0,
            dt: 1.0 / 30.0,
            ticks: 300,
            neighbour_policy: NeighbourPolicy::ExcludeSelf,
        }
    }
}

impl SimulationConfig {
    /// Reads and validates a JSON configuration file.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the file cannot be read, parsed or
    /// validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parses and validates configuration from a JSON string.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the text is not valid JSON for this type
    /// or fails [`SimulationConfig::validate`].
    ///
    /// # Examples
    /// ```
    /// use flock::SimulationConfig;
    /// let config = SimulationConfig::from_json(r#"{ "ticks": 5 }"#).unwrap();
    /// assert_eq!(config.ticks, 5);
    /// assert_eq!(config.sea_level(), 8.0);
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every field is usable.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.terrain_size < MIN_GRID_SIZE {
            return Err(invalid(
                "terrain_size",
                format!("must be at least {MIN_GRID_SIZE}, got {}", self.terrain_size),
            ));
        }
        if !(self.xy_scale.is_finite() && self.xy_scale > 0.0) {
            return Err(invalid(
                "xy_scale",
                format!("must be positive, got {}", self.xy_scale),
            ));
        }
        if !(self.z_scale.is_finite() && self.z_scale >= 0.0) {
            return Err(invalid(
                "z_scale",
                format!("must be non-negative, got {}", self.z_scale),
            ));
        }
        if let Some(level) = self.sea_level.filter(|level| !level.is_finite()) {
            return Err(invalid("sea_level", format!("must be finite, got {level}")));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(invalid("dt", format!("must be positive, got {}", self.dt)));
        }
        check_half_range("spawn.position_half_range", self.spawn.position_half_range)?;
        check_half_range(
            "spawn.horizontal_speed_factor",
            self.spawn.horizontal_speed_factor,
        )?;
        check_half_range(
            "spawn.vertical_speed_factor",
            self.spawn.vertical_speed_factor,
        )?;
        let (low, high) = self.spawn.height_range;
        if !(high - low).is_finite() || low > high {
            return Err(invalid(
                "spawn.height_range",
                format!("must be an ordered finite range, got ({low}, {high})"),
            ));
        }
        Ok(())
    }

    /// The configured sea level, or a quarter of `z_scale` when unset.
    #[must_use]
    pub fn sea_level(&self) -> f32 {
        self.sea_level
            .unwrap_or(self.z_scale * DEFAULT_SEA_LEVEL_FRACTION)
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

// Spawn samples from `-value..value`, so the full width must stay finite too.
fn check_half_range(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && (value * 2.0).is_finite() {
        Ok(())
    } else {
        Err(invalid(
            field,
            format!("must be non-negative with a finite width, got {value}"),
        ))
    }
}
