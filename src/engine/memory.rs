//! Memory-match board
//!
//! Each pair is one numeral card and one quantity card (that many animals).
//! The board is a small timed state machine:
//!
//! - `Idle`: no card waiting for a partner
//! - `Revealing`: one card face up
//! - `Resolving`: two cards face up, input locked until the reveal delay
//!   elapses, then the pair is judged

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::settings::Rules;

/// What the hidden side of a card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    /// The number as a digit
    Numeral,
    /// The number as a group of animals
    Quantity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryCard {
    pub pair_value: u32,
    pub face: CardFace,
    pub face_up: bool,
    pub matched: bool,
}

impl MemoryCard {
    fn new(pair_value: u32, face: CardFace) -> Self {
        Self {
            pair_value,
            face,
            face_up: false,
            matched: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Idle,
    Revealing {
        first: usize,
    },
    Resolving {
        first: usize,
        second: usize,
        is_match: bool,
        remaining_ms: u32,
    },
}

/// Result of a flip request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Locked, already face up, matched, or out of range
    Ignored,
    /// First card of a pair turned over
    First { index: usize },
    /// Second card turned over; the board is now locked
    Second { index: usize, is_match: bool },
}

/// Result of judging a revealed pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Matched { value: u32, pairs_found: usize },
    Missed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryBoard {
    cards: Vec<MemoryCard>,
    state: RevealState,
    pairs_found: usize,
    reveal_delay_ms: u32,
}

impl MemoryBoard {
    /// Deal a shuffled board of `rules.memory_pairs` distinct pair values
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, rules: &Rules) -> Self {
        let max_value = rules.memory_max_value.max(1);
        let pairs = rules.memory_pairs.clamp(1, max_value as usize);

        let mut values = Vec::with_capacity(pairs);
        while values.len() < pairs {
            let value = rng.random_range(1..=max_value);
            if !values.contains(&value) {
                values.push(value);
            }
        }

        let mut board = Self::from_values(&values, rules.reveal_delay_ms);
        board.cards.shuffle(rng);
        board
    }

    /// Unshuffled board: numeral then quantity card for each value in order
    pub fn from_values(values: &[u32], reveal_delay_ms: u32) -> Self {
        let cards = values
            .iter()
            .flat_map(|&v| {
                [
                    MemoryCard::new(v, CardFace::Numeral),
                    MemoryCard::new(v, CardFace::Quantity),
                ]
            })
            .collect();
        Self {
            cards,
            state: RevealState::Idle,
            pairs_found: 0,
            reveal_delay_ms,
        }
    }

    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.state, RevealState::Resolving { .. })
    }

    /// Cards turned over but not yet judged, in flip order
    pub fn face_up(&self) -> Vec<usize> {
        match self.state {
            RevealState::Idle => Vec::new(),
            RevealState::Revealing { first } => vec![first],
            RevealState::Resolving { first, second, .. } => vec![first, second],
        }
    }

    pub fn pairs_found(&self) -> usize {
        self.pairs_found
    }

    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn is_cleared(&self) -> bool {
        self.pairs_found == self.pair_count()
    }

    /// Turn a card face up
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if self.is_locked() {
            return FlipOutcome::Ignored;
        }
        match self.cards.get(index) {
            Some(card) if !card.face_up && !card.matched => {}
            _ => return FlipOutcome::Ignored,
        }

        self.cards[index].face_up = true;
        match self.state {
            RevealState::Idle => {
                self.state = RevealState::Revealing { first: index };
                FlipOutcome::First { index }
            }
            RevealState::Revealing { first } => {
                let is_match = self.cards[first].pair_value == self.cards[index].pair_value;
                self.state = RevealState::Resolving {
                    first,
                    second: index,
                    is_match,
                    remaining_ms: self.reveal_delay_ms,
                };
                FlipOutcome::Second { index, is_match }
            }
            RevealState::Resolving { .. } => FlipOutcome::Ignored,
        }
    }

    /// Advance the reveal pause; judges the pair once it elapses
    pub fn advance(&mut self, dt_ms: u32) -> Option<Resolution> {
        let RevealState::Resolving {
            first,
            second,
            is_match,
            remaining_ms,
        } = self.state
        else {
            return None;
        };

        if dt_ms < remaining_ms {
            self.state = RevealState::Resolving {
                first,
                second,
                is_match,
                remaining_ms: remaining_ms - dt_ms,
            };
            return None;
        }

        self.state = RevealState::Idle;
        if is_match {
            self.cards[first].matched = true;
            self.cards[second].matched = true;
            self.pairs_found += 1;
            Some(Resolution::Matched {
                value: self.cards[first].pair_value,
                pairs_found: self.pairs_found,
            })
        } else {
            self.cards[first].face_up = false;
            self.cards[second].face_up = false;
            Some(Resolution::Missed)
        }
    }

    /// Abort any pending reveal: unmatched cards go face down, input unlocks
    pub fn cancel(&mut self) {
        for index in self.face_up() {
            if !self.cards[index].matched {
                self.cards[index].face_up = false;
            }
        }
        self.state = RevealState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Difficulty;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn board_245() -> MemoryBoard {
        // Layout: [2N, 2Q, 4N, 4Q, 5N, 5Q]
        MemoryBoard::from_values(&[2, 4, 5], 1000)
    }

    #[test]
    fn test_generated_board_is_paired() {
        let rules = Difficulty::Normal.rules();
        let mut rng = Pcg32::seed_from_u64(42);
        let board = MemoryBoard::generate(&mut rng, &rules);
        assert_eq!(board.cards().len(), 6);
        for card in board.cards() {
            let same: Vec<_> = board
                .cards()
                .iter()
                .filter(|c| c.pair_value == card.pair_value)
                .collect();
            assert_eq!(same.len(), 2);
            assert_ne!(same[0].face, same[1].face);
            assert!((1..=6).contains(&card.pair_value));
        }
    }

    #[test]
    fn test_matching_pair() {
        let mut board = board_245();
        assert_eq!(board.flip(2), FlipOutcome::First { index: 2 });
        assert_eq!(
            board.flip(3),
            FlipOutcome::Second {
                index: 3,
                is_match: true
            }
        );
        assert!(board.is_locked());
        assert_eq!(board.face_up(), vec![2, 3]);

        // Nothing happens before the pause elapses
        assert_eq!(board.advance(400), None);
        assert!(board.is_locked());

        assert_eq!(
            board.advance(600),
            Some(Resolution::Matched {
                value: 4,
                pairs_found: 1
            })
        );
        assert!(!board.is_locked());
        assert!(board.cards()[2].matched && board.cards()[3].matched);
        assert_eq!(board.pairs_found(), 1);
        assert!(board.face_up().is_empty());
    }

    #[test]
    fn test_mismatch_flips_back() {
        let mut board = board_245();
        board.flip(0);
        assert_eq!(
            board.flip(5),
            FlipOutcome::Second {
                index: 5,
                is_match: false
            }
        );
        assert_eq!(board.advance(1000), Some(Resolution::Missed));
        assert!(!board.cards()[0].face_up);
        assert!(!board.cards()[5].face_up);
        assert_eq!(board.pairs_found(), 0);
        assert_eq!(board.state(), RevealState::Idle);
    }

    #[test]
    fn test_flips_ignored_when_invalid() {
        let mut board = board_245();
        board.flip(0);
        // Same card again
        assert_eq!(board.flip(0), FlipOutcome::Ignored);
        // Out of range
        assert_eq!(board.flip(6), FlipOutcome::Ignored);

        board.flip(1);
        // Locked while resolving
        assert_eq!(board.flip(2), FlipOutcome::Ignored);
        board.advance(1000);

        // Matched cards can't be flipped
        assert_eq!(board.flip(1), FlipOutcome::Ignored);
        assert_eq!(board.flip(2), FlipOutcome::First { index: 2 });
    }

    #[test]
    fn test_clear_board() {
        let mut board = board_245();
        for pair in 0..3 {
            board.flip(pair * 2 + 1);
            board.flip(pair * 2);
            board.advance(1000);
        }
        assert!(board.is_cleared());
        assert_eq!(board.pairs_found(), 3);
    }

    #[test]
    fn test_cancel_unlocks() {
        let mut board = board_245();
        board.flip(0);
        board.flip(1);
        board.advance(1000);
        board.flip(2);
        board.flip(4);
        board.cancel();

        assert_eq!(board.state(), RevealState::Idle);
        assert!(!board.cards()[2].face_up);
        assert!(!board.cards()[4].face_up);
        // Matched cards stay revealed
        assert!(board.cards()[0].face_up && board.cards()[0].matched);
        assert_eq!(board.advance(1000), None);
    }
}
