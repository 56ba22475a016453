use lobsim_core::{BookState, Side, Size};
use lobsim_ports::{MarketOrderFill, OrderExecutor};

/// Level-granularity sweep (best price first)
///
/// A market order walks the opposite side of the ladder:
/// 1. Buys consume asks from index 0 upward
/// 2. Sells consume bids from index 0 downward
///
/// Each level gives up `min(size, remaining)`. There is no queue within a
/// level, so priority stops at price.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelSweepExecutor;

impl LevelSweepExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl OrderExecutor for LevelSweepExecutor {
    fn execute(&self, book: &BookState, side: Side, quantity: Size) -> MarketOrderFill {
        apply_market_order(book, side, quantity)
    }

    fn name(&self) -> &str {
        "Level Sweep"
    }
}

/// Execute a market order against a copy of `book`
///
/// `last_trade_price` on the returned book ends at the price of the last
/// level actually touched. A short book yields a partial fill; zero quantity
/// returns an unchanged copy with nothing filled.
pub fn apply_market_order(book: &BookState, side: Side, quantity: Size) -> MarketOrderFill {
    let mut next_book = book.clone();

    let mut remaining = quantity;
    let mut filled_qty: Size = 0;
    let mut notional = 0.0;
    let mut last_price = next_book.last_trade_price;

    for level in next_book.side_mut(side.consumes()).iter_mut() {
        if remaining == 0 {
            break;
        }
        let taken = level.size.min(remaining);
        level.size -= taken;
        remaining -= taken;
        filled_qty += taken;
        notional += taken as f64 * level.price;
        if taken > 0 {
            last_price = level.price;
        }
    }
    next_book.last_trade_price = last_price;

    if remaining > 0 && quantity > 0 {
        log::debug!(
            "{:?} market order partially filled: {}/{} ({} unfilled)",
            side,
            filled_qty,
            quantity,
            remaining
        );
    }

    let avg_price = if filled_qty > 0 {
        notional / filled_qty as f64
    } else {
        next_book.last_trade_price
    };

    MarketOrderFill {
        next_book,
        filled_qty,
        avg_price,
    }
}
