//! Cancellation handler

use lobsim_core::{BookState, Size, round_half_up};
use lobsim_ports::RandomSource;

use crate::selection::{LevelMutation, choose_level};

/// Share of `base_size` removed by one cancellation
pub const CANCEL_FRACTION: f64 = 0.35;

/// Units removed per cancellation: `max(1, round(base_size * 0.35))`
pub fn cancel_size(base_size: Size) -> Size {
    round_half_up(base_size as f64 * CANCEL_FRACTION).max(1)
}

/// Cancel resting size at one randomly chosen level
///
/// Size is floored at zero; refilling is left to replenishment.
pub fn apply_cancellation<R: RandomSource + ?Sized>(
    book: &BookState,
    rng: &mut R,
    base_size: Size,
) -> LevelMutation {
    let choice = choose_level(book, rng);
    let mut next_book = book.clone();

    if let Some(level) = next_book.side_mut(choice.side).get_mut(choice.index) {
        level.size = level.size.saturating_sub(cancel_size(base_size));
    }

    LevelMutation {
        next_book,
        side: choice.side,
        index: choice.index,
    }
}
