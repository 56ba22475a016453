use lobsim_core::{BookState, Price, Side, Size};

/// Outcome of executing one market order against a book
#[derive(Debug, Clone, PartialEq)]
pub struct MarketOrderFill {
    /// The book after the order consumed liquidity (a fresh copy)
    pub next_book: BookState,
    /// Quantity actually filled, at most the requested quantity
    pub filled_qty: Size,
    /// Volume-weighted fill price, or the last trade price when nothing filled
    pub avg_price: Price,
}

impl MarketOrderFill {
    /// True if the order filled nothing
    pub fn is_empty(&self) -> bool {
        self.filled_qty == 0
    }
}

/// Port for market order execution
///
/// Implementations never mutate the input book; they return the post-trade
/// book inside the fill. Thin liquidity is a partial fill, never an error.
pub trait OrderExecutor: Send + Sync {
    /// Execute a market order of `quantity` on `side`
    fn execute(&self, book: &BookState, side: Side, quantity: Size) -> MarketOrderFill;

    /// Get the name of the execution model
    fn name(&self) -> &str;
}
