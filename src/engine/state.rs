//! Session state and the command/event vocabulary
//!
//! The session is plain data: `tick::handle` and `tick::advance` mutate it and
//! report what happened as `GameEvent`s.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rounds::{Answer, Round};
use crate::settings::Rules;

/// Mini-game types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Count,
    Find,
    Sequence,
    Comparison,
    Memory,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Count,
        Mode::Find,
        Mode::Sequence,
        Mode::Comparison,
        Mode::Memory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Count => "count",
            Mode::Find => "find",
            Mode::Sequence => "sequence",
            Mode::Comparison => "comparison",
            Mode::Memory => "memory",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }
}

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No mode running
    Menu,
    /// Waiting for an answer or a card flip
    Awaiting,
    /// Wrong answer shown; answers ignored until it elapses
    Cooldown { remaining_ms: u32 },
    /// Success overlay shown; next round starts when it elapses
    Celebrating { remaining_ms: u32 },
    /// Memory board cleared and not regenerated
    Complete,
}

/// Player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StartMode(Mode),
    Answer(Answer),
    FlipCard(usize),
    ToMenu,
}

/// Things that happened, for the score sink and presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh round is ready to be shown
    RoundStarted(Mode),
    /// Correct answer
    Correct { points: u64, total: u64 },
    /// Wrong answer
    Wrong,
    CardFlipped { index: usize },
    /// Second card of a pair turned; judged after the reveal pause
    PairRevealed { is_match: bool },
    PairMatched { value: u32, pairs_found: usize },
    PairMissed,
    /// Every pair on the board found
    BoardCleared { bonus: u64, total: u64 },
    ReturnedToMenu,
}

impl GameEvent {
    /// Points this event adds to the score
    pub fn points(&self) -> u64 {
        match self {
            GameEvent::Correct { points, .. } => *points,
            GameEvent::BoardCleared { bonus, .. } => *bonus,
            _ => 0,
        }
    }
}

/// In-memory game session
#[derive(Debug, Clone)]
pub struct Session {
    pub rules: Rules,
    /// Session score, seeded from the active profile
    pub score: u64,
    pub mode: Option<Mode>,
    pub phase: Phase,
    pub round: Option<Round>,
    pub rounds_won: u32,
    pub wrong_answers: u32,
    pub(crate) rng: Pcg32,
}

impl Session {
    pub fn new(rules: Rules, seed: u64) -> Self {
        Self {
            rules,
            score: 0,
            mode: None,
            phase: Phase::Menu,
            round: None,
            rounds_won: 0,
            wrong_answers: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Reset for a newly selected profile
    pub fn begin(&mut self, score: u64) {
        self.score = score;
        self.mode = None;
        self.phase = Phase::Menu;
        self.round = None;
        self.rounds_won = 0;
        self.wrong_answers = 0;
    }

    /// Replace a round with a custom one (tests and replays)
    pub fn set_round(&mut self, round: Round) {
        self.mode = Some(round.mode());
        self.round = Some(round);
        self.phase = Phase::Awaiting;
    }

    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::Awaiting
    }
}
