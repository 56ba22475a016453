//! LOB Simulator Runner
//!
//! Drives the limit order book simulation:
//!
//! - **Config**: `SimulationParams`, loadable from JSON
//! - **Simulation**: the discrete-event loop over one book
//! - **Run**: event log, snapshots and the views derived from them
//! - **Sweep**: concurrent runs across many seeds
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────┐   draw    ┌──────────────────────────────┐
//!   │  Mulberry32  │ ────────► │          Simulation          │
//!   └──────────────┘           │  classify: MKT / CANCEL /    │
//!                              │            LIMIT             │
//!                              └──────────────┬───────────────┘
//!                                             │ new book
//!                                             ▼
//!                              ┌──────────────────────────────┐
//!                              │  Replenish ─► Snapshot       │
//!                              └──────────────┬───────────────┘
//!                                             │
//!                                             ▼
//!                                      SimulationRun
//! ```

pub mod config;
pub mod error;
pub mod run;
pub mod simulation;
pub mod sweep;

// Re-export main types
pub use config::{ConfigError, SimulationParams};
pub use error::{Result, SimulationError};
pub use run::{EventCounts, RunSummary, SeriesPoint, SimulationRun};
pub use simulation::{Simulation, StepOutcome, run_simulation, try_run_simulation};
pub use sweep::{SeedOutcome, sweep_seeds};

// The four engine operations, in one place for the UI layer
pub use lobsim_core::{BookState, MetricsSnapshot, compute_snapshot, create_book};
pub use lobsim_matching::apply_market_order;
