//! Fixed-depth price-level book
//!
//! Each side is a ladder of `levels` price points spaced one tick apart,
//! stored best-first. Level prices are fixed at creation; only sizes change.

use serde::{Deserialize, Serialize};

use super::{BookSide, Level};
use crate::values::{Price, Size};

/// Bid/ask level ladder plus the last trade price
///
/// Bids are stored in descending price order (highest first).
/// Asks are stored in ascending price order (lowest first).
/// Index 0 on each side is the best price, whether or not anything rests there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookState {
    pub bids: Vec<Level>,
    pub asks: Vec<Level>,
    pub last_trade_price: Price,
}

impl BookState {
    /// Build a symmetric ladder around `mid`
    ///
    /// Level `i` (1-based) sits at `mid ∓ i * tick_size` with `base_size`
    /// resting. No validation: a non-positive tick or zero levels is a
    /// configuration error the caller must reject first.
    pub fn new(mid: Price, tick_size: Price, levels: usize, base_size: Size) -> Self {
        let mut bids = Vec::with_capacity(levels);
        let mut asks = Vec::with_capacity(levels);

        for i in 1..=levels {
            let offset = i as f64 * tick_size;
            bids.push(Level::new(mid - offset, base_size));
            asks.push(Level::new(mid + offset, base_size));
        }

        Self {
            bids,
            asks,
            last_trade_price: mid,
        }
    }

    /// Levels on one side, best first
    pub fn side(&self, side: BookSide) -> &[Level] {
        match side {
            BookSide::Bid => &self.bids,
            BookSide::Ask => &self.asks,
        }
    }

    /// Mutable levels on one side, best first
    ///
    /// The slice can't grow or shrink, so the ladder depth is preserved.
    pub fn side_mut(&mut self, side: BookSide) -> &mut [Level] {
        match side {
            BookSide::Bid => &mut self.bids,
            BookSide::Ask => &mut self.asks,
        }
    }

    /// Number of levels per side
    pub fn depth(&self) -> usize {
        self.bids.len()
    }

    // === Price Queries ===

    /// First bid level with resting size
    pub fn best_bid(&self) -> Option<&Level> {
        self.bids.iter().find(|level| !level.is_empty())
    }

    /// First ask level with resting size
    pub fn best_ask(&self) -> Option<&Level> {
        self.asks.iter().find(|level| !level.is_empty())
    }

    /// Total size resting on one side
    pub fn total_size(&self, side: BookSide) -> Size {
        self.side(side).iter().map(|level| level.size).sum()
    }

    /// Check if book has liquidity on both sides
    pub fn is_two_sided(&self) -> bool {
        self.best_bid().is_some() && self.best_ask().is_some()
    }
}

/// Free-function form of [`BookState::new`]
pub fn create_book(mid: Price, tick_size: Price, levels: usize, base_size: Size) -> BookState {
    BookState::new(mid, tick_size, levels, base_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_create_book_ladder() {
        let book = create_book(100.0, 0.5, 3, 10);

        assert_eq!(book.depth(), 3);
        assert_eq!(book.asks.len(), 3);
        assert_relative_eq!(book.bids[0].price, 99.5);
        assert_relative_eq!(book.bids[2].price, 98.5);
        assert_relative_eq!(book.asks[0].price, 100.5);
        assert_relative_eq!(book.asks[2].price, 101.5);
        assert!(book.bids.iter().chain(book.asks.iter()).all(|l| l.size == 10));
        assert_relative_eq!(book.last_trade_price, 100.0);
    }

    #[test]
    fn test_ladder_ordering() {
        let book = create_book(100.0, 0.25, 6, 5);

        assert!(book.bids.windows(2).all(|w| w[0].price > w[1].price));
        assert!(book.asks.windows(2).all(|w| w[0].price < w[1].price));
    }

    #[test]
    fn test_best_level_skips_empty() {
        let mut book = create_book(100.0, 0.5, 3, 10);
        book.side_mut(BookSide::Ask)[0].size = 0;

        let best = book.best_ask().unwrap();
        assert_relative_eq!(best.price, 101.0);
        assert_eq!(book.total_size(BookSide::Ask), 20);
        assert!(book.is_two_sided());
    }

    #[test]
    fn test_zero_levels_is_empty_book() {
        let book = create_book(100.0, 0.5, 0, 10);

        assert_eq!(book.depth(), 0);
        assert!(book.best_bid().is_none());
        assert!(!book.is_two_sided());
    }
}
