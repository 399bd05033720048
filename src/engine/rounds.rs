//! Per-mode round setup and answer checking

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::memory::MemoryBoard;
use super::question::generate_options;
use super::state::Mode;
use crate::profiles::Animal;
use crate::settings::Rules;

/// Which group of animals the player picked in comparison mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Side::Left),
            "right" => Some(Side::Right),
            _ => None,
        }
    }
}

/// A player's answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Number(u32),
    Side(Side),
}

fn random_animal<R: Rng + ?Sized>(rng: &mut R) -> Animal {
    Animal::ALL[rng.random_range(0..Animal::ALL.len())]
}

/// Count the animals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountRound {
    pub count: u32,
    pub animal: Animal,
    pub options: Vec<u32>,
}

impl CountRound {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, rules: &Rules) -> Self {
        let count = rng.random_range(1..=rules.max_value);
        let animal = random_animal(rng);
        let options = generate_options(rng, count, rules.count_options, rules.max_value);
        Self {
            count,
            animal,
            options,
        }
    }
}

/// Find the shown numeral among the buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindRound {
    pub target: u32,
    pub options: Vec<u32>,
}

impl FindRound {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, rules: &Rules) -> Self {
        let target = rng.random_range(1..=rules.max_value);
        let options = generate_options(rng, target, rules.find_options, rules.max_value);
        Self { target, options }
    }
}

/// Fill the gap in a run of consecutive numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRound {
    pub start: u32,
    pub length: u32,
    /// Position of the hidden number within the run
    pub hidden_index: u32,
    pub options: Vec<u32>,
}

impl SequenceRound {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, rules: &Rules) -> Self {
        let length = rules.sequence_length.clamp(2, rules.max_value.max(2));
        let last_start = rules.max_value.saturating_sub(length) + 1;
        let start = rng.random_range(1..=last_start.max(1));
        let hidden_index = rng.random_range(0..length);
        let hidden = start + hidden_index;
        let max_value = rules.max_value.max(start + length - 1);
        let options = generate_options(rng, hidden, rules.sequence_options, max_value);
        Self {
            start,
            length,
            hidden_index,
            options,
        }
    }

    pub fn hidden_value(&self) -> u32 {
        self.start + self.hidden_index
    }

    /// The run as shown, with `None` at the hidden position
    pub fn slots(&self) -> Vec<Option<u32>> {
        (0..self.length)
            .map(|i| (i != self.hidden_index).then_some(self.start + i))
            .collect()
    }
}

/// Which side has more animals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRound {
    pub left: u32,
    pub right: u32,
    pub left_animal: Animal,
    pub right_animal: Animal,
}

impl ComparisonRound {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, rules: &Rules) -> Self {
        // Two values are needed for distinct operands
        let max_value = rules.max_value.max(2);
        let left = rng.random_range(1..=max_value);
        let mut right = rng.random_range(1..=max_value);
        while right == left {
            right = rng.random_range(1..=max_value);
        }
        Self {
            left,
            right,
            left_animal: random_animal(rng),
            right_animal: random_animal(rng),
        }
    }

    pub fn correct_side(&self) -> Side {
        if self.left > self.right {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// One round of any mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Round {
    Count(CountRound),
    Find(FindRound),
    Sequence(SequenceRound),
    Comparison(ComparisonRound),
    Memory(MemoryBoard),
}

impl Round {
    pub fn generate<R: Rng + ?Sized>(mode: Mode, rules: &Rules, rng: &mut R) -> Self {
        match mode {
            Mode::Count => Round::Count(CountRound::generate(rng, rules)),
            Mode::Find => Round::Find(FindRound::generate(rng, rules)),
            Mode::Sequence => Round::Sequence(SequenceRound::generate(rng, rules)),
            Mode::Comparison => Round::Comparison(ComparisonRound::generate(rng, rules)),
            Mode::Memory => Round::Memory(MemoryBoard::generate(rng, rules)),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Round::Count(_) => Mode::Count,
            Round::Find(_) => Mode::Find,
            Round::Sequence(_) => Mode::Sequence,
            Round::Comparison(_) => Mode::Comparison,
            Round::Memory(_) => Mode::Memory,
        }
    }

    /// The expected answer (memory rounds have none)
    pub fn correct_answer(&self) -> Option<Answer> {
        match self {
            Round::Count(r) => Some(Answer::Number(r.count)),
            Round::Find(r) => Some(Answer::Number(r.target)),
            Round::Sequence(r) => Some(Answer::Number(r.hidden_value())),
            Round::Comparison(r) => Some(Answer::Side(r.correct_side())),
            Round::Memory(_) => None,
        }
    }

    pub fn is_correct(&self, answer: Answer) -> bool {
        self.correct_answer() == Some(answer)
    }

    /// Numeric answer buttons (empty for comparison and memory)
    pub fn options(&self) -> &[u32] {
        match self {
            Round::Count(r) => &r.options,
            Round::Find(r) => &r.options,
            Round::Sequence(r) => &r.options,
            Round::Comparison(_) | Round::Memory(_) => &[],
        }
    }

    pub fn board(&self) -> Option<&MemoryBoard> {
        match self {
            Round::Memory(board) => Some(board),
            _ => None,
        }
    }

    pub fn board_mut(&mut self) -> Option<&mut MemoryBoard> {
        match self {
            Round::Memory(board) => Some(board),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Difficulty;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_count_round() {
        let rules = Difficulty::Normal.rules();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..50 {
            let round = CountRound::generate(&mut rng, &rules);
            assert!((1..=9).contains(&round.count));
            assert_eq!(round.options.len(), 3);
            assert!(round.options.contains(&round.count));
        }
    }

    #[test]
    fn test_sequence_round_shape() {
        let mut rng = Pcg32::seed_from_u64(11);
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            let rules = difficulty.rules();
            for _ in 0..50 {
                let round = SequenceRound::generate(&mut rng, &rules);
                let slots = round.slots();
                assert_eq!(slots.len() as u32, rules.sequence_length);
                assert_eq!(slots.iter().filter(|s| s.is_none()).count(), 1);
                assert!(round.start + round.length - 1 <= rules.max_value);
                assert!(round.options.contains(&round.hidden_value()));
            }
        }
    }

    #[test]
    fn test_comparison_never_ties() {
        let rules = Difficulty::Easy.rules();
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..100 {
            let round = ComparisonRound::generate(&mut rng, &rules);
            assert_ne!(round.left, round.right);
            let bigger = round.left.max(round.right);
            let expected = if round.left == bigger { Side::Left } else { Side::Right };
            assert_eq!(round.correct_side(), expected);
        }
    }

    #[test]
    fn test_answer_checking() {
        let round = Round::Find(FindRound {
            target: 4,
            options: vec![2, 4, 7, 8, 9],
        });
        assert!(round.is_correct(Answer::Number(4)));
        assert!(!round.is_correct(Answer::Number(7)));
        assert!(!round.is_correct(Answer::Side(Side::Left)));

        let round = Round::Comparison(ComparisonRound {
            left: 3,
            right: 8,
            left_animal: Animal::Lion,
            right_animal: Animal::Giraffe,
        });
        assert!(round.is_correct(Answer::Side(Side::Right)));
        assert!(!round.is_correct(Answer::Side(Side::Left)));
        assert!(round.options().is_empty());
    }

    #[test]
    fn test_generate_matches_mode() {
        let rules = Rules::default();
        let mut rng = Pcg32::seed_from_u64(9);
        for mode in Mode::ALL {
            assert_eq!(Round::generate(mode, &rules, &mut rng).mode(), mode);
        }
    }
}
