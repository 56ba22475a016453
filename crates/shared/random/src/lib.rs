//! LOB Simulator Random Sources
//!
//! Provides the uniform draws that drive order flow:
//!
//! - [`Mulberry32`]: seeded 32-bit generator, reproducible bit for bit
//! - [`ScriptedSource`]: replays a fixed list of draws, for tests
//!
//! ## Usage
//!
//! ```
//! use lobsim_random::{Mulberry32, RandomSource};
//!
//! let mut first = Mulberry32::new(42);
//! let mut second = Mulberry32::new(42);
//! assert_eq!(first.next_f64(), second.next_f64());
//! ```

mod mulberry;
mod scripted;

pub use mulberry::{Mulberry32, normalize_seed};
pub use scripted::ScriptedSource;

// Re-export the RandomSource trait for convenience
pub use lobsim_ports::RandomSource;
