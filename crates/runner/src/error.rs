use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced at the simulation boundary
///
/// The event loop itself is total; these only come from configuration
/// checks and from the async sweep harness.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Simulation task failed: {0}")]
    Join(String),
}

pub type Result<T> = std::result::Result<T, SimulationError>;
