//! LOB Simulator Order Flow
//!
//! The book-mutating half of the event loop:
//!
//! - **Events**: typed order-flow events and their log labels
//! - **Cancellation**: removes size from one random level
//! - **Limit arrival**: adds size to one random level
//! - **Replenishment**: refills depleted levels after every event
//!
//! Every handler takes the current book by reference (or by value) and
//! returns a new one, so a caller's snapshot is never mutated behind its back.

pub mod cancel;
pub mod event;
pub mod limit;
pub mod replenish;
pub mod selection;

// Re-export main types
pub use cancel::{CANCEL_FRACTION, apply_cancellation, cancel_size};
pub use event::{EventKind, OrderFlowEvent, format_price};
pub use limit::{apply_limit_arrival, limit_arrival_size};
pub use replenish::{replenish, replenish_size};
pub use selection::{LevelChoice, LevelMutation, choose_level};
