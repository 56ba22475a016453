//! LOB Simulator Ports
//!
//! Port definitions (traits) for the limit order book simulator.
//! These define the boundaries between the event loop and the pieces it drives.

mod execution;
mod random;

pub use execution::{MarketOrderFill, OrderExecutor};
pub use random::RandomSource;
