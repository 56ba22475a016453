//! LOB Simulator Matching
//!
//! Market order execution against the fixed-depth level ladder.

mod level_sweep;

pub use level_sweep::{LevelSweepExecutor, apply_market_order};

// Re-export the port for convenience
pub use lobsim_ports::{MarketOrderFill, OrderExecutor};
