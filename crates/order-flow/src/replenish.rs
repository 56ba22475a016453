//! Replenishment policy
//!
//! Runs after every event and refills any empty level, so the book stays
//! two-sided and the metrics never sit on an empty side for more than the
//! event that emptied it.

use lobsim_core::{BookSide, BookState, Size, round_half_up};

/// Refill size for an empty level: `max(1, round(base_size / 2))`
pub fn replenish_size(base_size: Size) -> Size {
    round_half_up(base_size as f64 / 2.0).max(1)
}

/// Refill every empty level on both sides
pub fn replenish(mut book: BookState, base_size: Size) -> BookState {
    let refill = replenish_size(base_size);

    for side in [BookSide::Bid, BookSide::Ask] {
        for (index, level) in book.side_mut(side).iter_mut().enumerate() {
            if level.is_empty() {
                log::trace!("Replenishing {:?}[{}] to {}", side, index, refill);
                level.size = refill;
            }
        }
    }

    book
}
