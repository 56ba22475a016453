//! Order-flow events and their log labels

use std::fmt;

use lobsim_core::{BookSide, Price, Side, Size};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Which handler a step dispatches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Market,
    Cancel,
    Limit,
}

impl EventKind {
    /// Classify a uniform draw against the configured rates
    ///
    /// `[0, market)` is a market order, `[market, market + cancel)` a cancel,
    /// and everything above a limit arrival.
    pub fn classify(draw: f64, market_rate: f64, cancel_rate: f64) -> Self {
        if draw < market_rate {
            EventKind::Market
        } else if draw < market_rate + cancel_rate {
            EventKind::Cancel
        } else {
            EventKind::Limit
        }
    }
}

/// One applied order-flow event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrderFlowEvent {
    /// Market order swept the opposite side
    Market {
        side: Side,
        filled_qty: Size,
        avg_price: Price,
    },
    /// Size cancelled at one level
    Cancel { side: BookSide, index: usize },
    /// New limit size rested at one level
    Limit { side: BookSide, index: usize },
}

impl OrderFlowEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            OrderFlowEvent::Market { .. } => EventKind::Market,
            OrderFlowEvent::Cancel { .. } => EventKind::Cancel,
            OrderFlowEvent::Limit { .. } => EventKind::Limit,
        }
    }

    /// Log label, e.g. `MKT_BUY_8@100.50` or `CANCEL_ASK_3`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OrderFlowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderFlowEvent::Market {
                side,
                filled_qty,
                avg_price,
            } => write!(
                f,
                "MKT_{}_{}@{}",
                side.as_str(),
                filled_qty,
                format_price(*avg_price)
            ),
            OrderFlowEvent::Cancel { side, index } => {
                write!(f, "CANCEL_{}_{}", side.as_str(), index)
            }
            OrderFlowEvent::Limit { side, index } => write!(f, "LIMIT_{}_{}", side.as_str(), index),
        }
    }
}

/// Format a price with exactly two decimals
///
/// Rounds the exact binary value, with exact midpoints going away from zero,
/// so `100.625` prints as `100.63`.
pub fn format_price(price: Price) -> String {
    match Decimal::from_f64_retain(price) {
        Some(value) => {
            let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.2}", rounded)
        }
        None => format!("{:.2}", price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(EventKind::classify(0.0, 0.25, 0.3), EventKind::Market);
        assert_eq!(EventKind::classify(0.2499, 0.25, 0.3), EventKind::Market);
        assert_eq!(EventKind::classify(0.25, 0.25, 0.3), EventKind::Cancel);
        assert_eq!(EventKind::classify(0.5499, 0.25, 0.3), EventKind::Cancel);
        assert_eq!(EventKind::classify(0.55, 0.25, 0.3), EventKind::Limit);
        assert_eq!(EventKind::classify(0.1, 0.0, 0.0), EventKind::Limit);
    }

    #[test]
    fn test_labels() {
        let market = OrderFlowEvent::Market {
            side: Side::Buy,
            filled_qty: 8,
            avg_price: 100.5,
        };
        let cancel = OrderFlowEvent::Cancel {
            side: BookSide::Ask,
            index: 3,
        };
        let limit = OrderFlowEvent::Limit {
            side: BookSide::Bid,
            index: 0,
        };

        assert_eq!(market.label(), "MKT_BUY_8@100.50");
        assert_eq!(cancel.label(), "CANCEL_ASK_3");
        assert_eq!(limit.label(), "LIMIT_BID_0");
        assert_eq!(market.kind(), EventKind::Market);
        assert_eq!(cancel.kind(), EventKind::Cancel);
        assert_eq!(limit.kind(), EventKind::Limit);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(100.0), "100.00");
        assert_eq!(format_price(99.5), "99.50");
        assert_eq!(format_price(100.6875), "100.69");
        assert_eq!(format_price(100.8125), "100.81");
        assert_eq!(format_price(100.625), "100.63");
    }
}
