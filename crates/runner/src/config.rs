//! Simulation parameters
//!
//! Loaded from JSON or built in code. Every field has a default, so a
//! config file only needs the values it changes:
//!
//! ```json
//! { "seed": 7, "market_rate": 0.4, "market_order_size": 12 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors from loading or validating [`SimulationParams`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Mid price must be finite, got {0}")]
    InvalidMid(f64),

    #[error("Tick size must be positive, got {0}")]
    InvalidTickSize(f64),

    #[error("Book needs at least one level per side")]
    ZeroLevels,

    #[error("Rate {name} must be within [0, 1], got {value}")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("market_rate ({market}) + cancel_rate ({cancel}) exceeds 1")]
    RatesExceedOne { market: f64, cancel: f64 },
}

/// Order-flow and book parameters for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Generator seed (low 32 bits used, 0 coerced to 1)
    pub seed: i64,
    /// Mid price the ladder is built around
    pub mid: f64,
    /// Price distance between adjacent levels
    pub tick_size: f64,
    /// Levels per side
    pub levels: usize,
    /// Initial size per level; also scales cancel/limit/refill sizes
    pub base_size: u64,
    /// Limit arrival size as a fraction of `base_size`
    pub limit_arrival_rate: f64,
    /// Probability that a step is a cancellation
    pub cancel_rate: f64,
    /// Probability that a step is a market order
    pub market_rate: f64,
    /// Quantity of every market order
    pub market_order_size: u64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            seed: 42,
            mid: 100.0,
            tick_size: 0.5,
            levels: 6,
            base_size: 20,
            limit_arrival_rate: 0.45,
            cancel_rate: 0.3,
            market_rate: 0.25,
            market_order_size: 8,
        }
    }
}

impl SimulationParams {
    /// Load parameters from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse parameters from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Same parameters with a different seed
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = seed;
        self
    }

    /// Probability that a step is a limit arrival
    pub fn limit_probability(&self) -> f64 {
        (1.0 - self.market_rate - self.cancel_rate).max(0.0)
    }

    /// Reject parameters the book constructor can't handle
    ///
    /// The engine never calls this itself; it is the guard for whatever
    /// layer collects user input.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.mid.is_finite() {
            return Err(ConfigError::InvalidMid(self.mid));
        }
        if !self.tick_size.is_finite() || self.tick_size <= 0.0 {
            return Err(ConfigError::InvalidTickSize(self.tick_size));
        }
        if self.levels == 0 {
            return Err(ConfigError::ZeroLevels);
        }

        for (name, value) in [
            ("market_rate", self.market_rate),
            ("cancel_rate", self.cancel_rate),
            ("limit_arrival_rate", self.limit_arrival_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidRate { name, value });
            }
        }

        if self.market_rate + self.cancel_rate > 1.0 + f64::EPSILON {
            return Err(ConfigError::RatesExceedOne {
                market: self.market_rate,
                cancel: self.cancel_rate,
            });
        }

        Ok(())
    }
}
