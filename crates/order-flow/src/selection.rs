//! Random level selection shared by the cancel and limit handlers

use lobsim_core::{BookSide, BookState};
use lobsim_ports::RandomSource;

/// A level picked for mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChoice {
    pub side: BookSide,
    pub index: usize,
}

/// Result of a single-level handler
#[derive(Debug, Clone, PartialEq)]
pub struct LevelMutation {
    pub next_book: BookState,
    pub side: BookSide,
    pub index: usize,
}

/// Pick a side and a level on it using two draws
///
/// First draw: ask if below 0.5, bid otherwise.
/// Second draw: index `floor(draw * level_count)`.
///
/// Both draws are always consumed so the stream stays aligned even when
/// the chosen side is empty (index 0 is reported then).
pub fn choose_level<R: RandomSource + ?Sized>(book: &BookState, rng: &mut R) -> LevelChoice {
    let side = if rng.next_f64() < 0.5 {
        BookSide::Ask
    } else {
        BookSide::Bid
    };

    let count = book.side(side).len();
    let draw = rng.next_f64();
    let index = ((draw * count as f64).floor() as usize).min(count.saturating_sub(1));

    LevelChoice { side, index }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lobsim_core::create_book;
    use lobsim_random::ScriptedSource;

    #[test]
    fn test_low_draw_picks_ask() {
        let book = create_book(100.0, 0.5, 6, 20);
        let mut rng = ScriptedSource::new(vec![0.2, 0.5]);

        let choice = choose_level(&book, &mut rng);

        assert_eq!(choice.side, BookSide::Ask);
        assert_eq!(choice.index, 3);
        assert_eq!(rng.consumed(), 2);
    }

    #[test]
    fn test_high_draw_picks_bid() {
        let book = create_book(100.0, 0.5, 6, 20);
        let mut rng = ScriptedSource::new(vec![0.5, 0.99]);

        let choice = choose_level(&book, &mut rng);

        assert_eq!(choice.side, BookSide::Bid);
        assert_eq!(choice.index, 5);
    }

    #[test]
    fn test_empty_ladder_reports_index_zero() {
        let book = create_book(100.0, 0.5, 0, 20);
        let mut rng = ScriptedSource::new(vec![0.1, 0.7]);

        let choice = choose_level(&book, &mut rng);

        assert_eq!(choice.index, 0);
        assert_eq!(rng.consumed(), 2);
    }
}
