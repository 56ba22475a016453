//! Top-of-book metrics
//!
//! Spread, imbalance and microprice derived from the best non-empty level on
//! each side. When a side has nothing resting its price falls back to the
//! last trade and its size counts as zero.

use serde::{Deserialize, Serialize};

use crate::entities::BookState;

/// Point-in-time metrics for one book state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Best ask minus best bid, never negative
    pub spread: f64,
    /// (bid size - ask size) / (bid size + ask size), in [-1, 1]
    pub imbalance: f64,
    /// Size-weighted fair price between the best bid and ask
    pub microprice: f64,
}

impl MetricsSnapshot {
    /// Compute metrics from the current book
    pub fn from_book(book: &BookState) -> Self {
        let best_bid = book.best_bid();
        let best_ask = book.best_ask();

        let bid = best_bid.map_or(book.last_trade_price, |level| level.price);
        let ask = best_ask.map_or(book.last_trade_price, |level| level.price);
        let bid_size = best_bid.map_or(0.0, |level| level.size as f64);
        let ask_size = best_ask.map_or(0.0, |level| level.size as f64);

        let spread = (ask - bid).max(0.0);
        let denom = bid_size + ask_size;

        let (imbalance, microprice) = if denom > 0.0 {
            (
                (bid_size - ask_size) / denom,
                (ask * bid_size + bid * ask_size) / denom,
            )
        } else {
            (0.0, (ask + bid) / 2.0)
        };

        Self {
            spread,
            imbalance,
            microprice,
        }
    }

    /// True if every field is a finite number
    pub fn is_finite(&self) -> bool {
        self.spread.is_finite() && self.imbalance.is_finite() && self.microprice.is_finite()
    }
}

/// Free-function form of [`MetricsSnapshot::from_book`]
pub fn compute_snapshot(book: &BookState) -> MetricsSnapshot {
    MetricsSnapshot::from_book(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{BookSide, create_book};
    use approx::assert_relative_eq;

    #[test]
    fn test_balanced_book() {
        let book = create_book(100.0, 0.5, 3, 10);
        let snapshot = compute_snapshot(&book);

        assert_relative_eq!(snapshot.spread, 1.0);
        assert_relative_eq!(snapshot.imbalance, 0.0);
        assert_relative_eq!(snapshot.microprice, 100.0);
    }

    #[test]
    fn test_bid_heavy_book_leans_microprice_up() {
        let mut book = create_book(100.0, 0.5, 3, 10);
        book.side_mut(BookSide::Bid)[0].size = 30;

        let snapshot = compute_snapshot(&book);

        // (30 - 10) / 40
        assert_relative_eq!(snapshot.imbalance, 0.5);
        // (100.5 * 30 + 99.5 * 10) / 40
        assert_relative_eq!(snapshot.microprice, 100.25);
    }

    #[test]
    fn test_emptied_best_level_widens_spread() {
        let mut book = create_book(100.0, 0.5, 3, 10);
        book.side_mut(BookSide::Ask)[0].size = 0;

        let snapshot = compute_snapshot(&book);
        assert_relative_eq!(snapshot.spread, 1.5);
    }

    #[test]
    fn test_one_sided_book_falls_back_to_last_trade() {
        let mut book = create_book(100.0, 0.5, 2, 10);
        for level in book.side_mut(BookSide::Ask) {
            level.size = 0;
        }

        let snapshot = compute_snapshot(&book);

        // ask falls back to 100.0, bid is 99.5 with all the size
        assert_relative_eq!(snapshot.spread, 0.5);
        assert_relative_eq!(snapshot.imbalance, 1.0);
        assert_relative_eq!(snapshot.microprice, 100.0);
        assert!(snapshot.is_finite());
    }

    #[test]
    fn test_empty_book_uses_midpoint() {
        let mut book = create_book(100.0, 0.5, 2, 10);
        for side in [BookSide::Bid, BookSide::Ask] {
            for level in book.side_mut(side) {
                level.size = 0;
            }
        }

        let snapshot = compute_snapshot(&book);

        assert_relative_eq!(snapshot.spread, 0.0);
        assert_relative_eq!(snapshot.imbalance, 0.0);
        assert_relative_eq!(snapshot.microprice, 100.0);
        assert!(snapshot.is_finite());
    }
}
