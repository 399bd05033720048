//! Presentation layer
//!
//! Screen ids, view data and HTML builders. Nothing here touches the DOM; the
//! wasm entry point only copies the produced markup into the page.

pub mod html;

use crate::engine::Mode;

/// User-facing strings
pub mod text {
    pub const EMPTY_NAME: &str = "Bitte gib einen Namen ein!";
    pub const SAVE_FAILED: &str =
        "Dein Fortschritt konnte nicht gespeichert werden! (Speicher voll oder deaktiviert?)";
    pub const NO_PROFILES: &str = "Noch keine Profile. Erstelle eins!";
    pub const SUCCESS_EMOJI: &str = "🎉";
    pub const SUCCESS_MESSAGE: &str = "Richtig!";
    pub const BOARD_CLEARED_MESSAGE: &str = "Alle Paare gefunden!";
    pub const STAR: &str = "⭐";
}

/// The fixed set of screens, toggled by the `active` class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    ProfileSelect,
    CreateProfile,
    Menu,
    Play(Mode),
    Ranking,
}

impl Screen {
    pub const ALL: [Screen; 9] = [
        Screen::ProfileSelect,
        Screen::CreateProfile,
        Screen::Menu,
        Screen::Play(Mode::Count),
        Screen::Play(Mode::Find),
        Screen::Play(Mode::Sequence),
        Screen::Play(Mode::Comparison),
        Screen::Play(Mode::Memory),
        Screen::Ranking,
    ];

    /// DOM id of the screen element
    pub fn element_id(&self) -> &'static str {
        match self {
            Screen::ProfileSelect => "profile-screen",
            Screen::CreateProfile => "create-profile-screen",
            Screen::Menu => "start-screen",
            Screen::Play(Mode::Count) => "count-screen",
            Screen::Play(Mode::Find) => "find-screen",
            Screen::Play(Mode::Sequence) => "sequence-screen",
            Screen::Play(Mode::Comparison) => "comparison-screen",
            Screen::Play(Mode::Memory) => "memory-screen",
            Screen::Ranking => "ranking-screen",
        }
    }

    pub fn shows_back_button(&self) -> bool {
        !matches!(
            self,
            Screen::ProfileSelect | Screen::CreateProfile | Screen::Menu
        )
    }
}

/// Header contents while a profile is active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub name: String,
    pub avatar: String,
    pub score: u64,
}

/// One line of the ranking screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEntry {
    pub label: String,
    pub name: String,
    pub avatar: String,
    pub score: u64,
}

/// Medal for the first three places, `#n` after that (1-based)
pub fn rank_label(rank: usize) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("#{n}"),
    }
}

/// Answer typed with a single key. `0` stands for 10 when the range
/// reaches 10, since that answer has no key of its own.
pub fn key_answer(key: &str, max_value: u32) -> Option<u32> {
    match key.parse::<u32>().ok()? {
        0 if max_value >= 10 => Some(10),
        0 => None,
        value if value <= max_value => Some(value),
        _ => None,
    }
}
