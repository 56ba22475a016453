//! Seed sweeps
//!
//! Runs the same parameters under many seeds at once. Each run owns its own
//! generator and book, so they go straight onto the blocking pool with no
//! shared state.

use serde::{Deserialize, Serialize};

use crate::config::SimulationParams;
use crate::error::{Result, SimulationError};
use crate::run::RunSummary;
use crate::simulation::run_simulation;

/// Summary of one seed's run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedOutcome {
    pub seed: i64,
    pub summary: RunSummary,
}

/// Run one simulation per seed concurrently
///
/// Parameters are validated once up front. Results come back in the order
/// the seeds were given.
pub async fn sweep_seeds(
    params: &SimulationParams,
    seeds: impl IntoIterator<Item = i64>,
    steps: usize,
) -> Result<Vec<SeedOutcome>> {
    params.validate()?;

    let handles: Vec<_> = seeds
        .into_iter()
        .map(|seed| {
            let params = params.clone().with_seed(seed);
            let handle = tokio::task::spawn_blocking(move || run_simulation(&params, steps));
            (seed, handle)
        })
        .collect();

    log::info!("Sweeping {} seeds, {} steps each", handles.len(), steps);

    let mut outcomes = Vec::with_capacity(handles.len());
    for (seed, handle) in handles {
        let run = handle
            .await
            .map_err(|e| SimulationError::Join(e.to_string()))?;
        match run.summary() {
            Some(summary) => outcomes.push(SeedOutcome { seed, summary }),
            None => log::warn!("Seed {} produced no snapshots", seed),
        }
    }

    Ok(outcomes)
}
