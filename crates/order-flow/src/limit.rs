//! Limit arrival handler

use lobsim_core::{BookState, Size, round_half_up};
use lobsim_ports::RandomSource;

use crate::selection::{LevelMutation, choose_level};

/// Units added per arrival: `max(1, round(base_size * arrival_rate))`
pub fn limit_arrival_size(base_size: Size, arrival_rate: f64) -> Size {
    round_half_up(base_size as f64 * arrival_rate).max(1)
}

/// Rest new size at one randomly chosen level
pub fn apply_limit_arrival<R: RandomSource + ?Sized>(
    book: &BookState,
    rng: &mut R,
    base_size: Size,
    arrival_rate: f64,
) -> LevelMutation {
    let choice = choose_level(book, rng);
    let mut next_book = book.clone();

    if let Some(level) = next_book.side_mut(choice.side).get_mut(choice.index) {
        level.size = level
            .size
            .saturating_add(limit_arrival_size(base_size, arrival_rate));
    }

    LevelMutation {
        next_book,
        side: choice.side,
        index: choice.index,
    }
}
