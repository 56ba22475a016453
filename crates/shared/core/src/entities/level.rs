use serde::{Deserialize, Serialize};

use crate::values::{Price, Size};

/// A single price point on the ladder and the size resting there
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub price: Price,
    pub size: Size,
}

impl Level {
    pub fn new(price: Price, size: Size) -> Self {
        Self { price, size }
    }

    /// True when nothing rests at this price
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}
