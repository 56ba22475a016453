//! LOB Simulator Core Domain
//!
//! Pure domain types for the limit order book simulator: the two side
//! enums, the fixed-depth level ladder and the metrics derived from it.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod metrics;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{BookSide, BookState, Level, Side, create_book};
pub use metrics::{MetricsSnapshot, compute_snapshot};
pub use values::{Price, Size, round_half_up};
