//! Zahlen-Safari - A number-recognition game for children
//!
//! Core modules:
//! - `engine`: Pure game logic (question generation, rounds, memory board)
//! - `profiles`: Player profiles and ranking
//! - `persistence`: Key-value storage with a versioned profile record
//! - `settings`: Difficulty presets and preferences
//! - `app`: Screen flow and the score sink tying everything together
//! - `ui`: Screen ids and HTML view builders
//! - `platform`: Browser/native platform abstraction

pub mod app;
pub mod engine;
pub mod error;
pub mod persistence;
pub mod platform;
pub mod profiles;
pub mod settings;
pub mod ui;

pub use app::App;
pub use error::{PersistenceError, ProfileError};
pub use profiles::{Animal, Profile, ProfileRegistry};
pub use settings::{Difficulty, Preference, Rules, Settings};

/// Game configuration constants
pub mod consts {
    /// Number of pairs on a memory board
    pub const MEMORY_PAIRS: usize = 3;
    /// Pair values on memory cards are drawn from 1..=MEMORY_MAX_VALUE
    pub const MEMORY_MAX_VALUE: u32 = 6;

    /// Pause with both memory cards visible before they are judged
    pub const REVEAL_DELAY_MS: u32 = 1000;
    /// Success overlay duration before the next round starts
    pub const FEEDBACK_DELAY_MS: u32 = 1500;
    /// Answers are ignored for this long after a wrong answer
    pub const ERROR_COOLDOWN_MS: u32 = 600;

    /// Bonus for clearing a full memory board
    pub const MEMORY_BONUS: u64 = 20;
}
