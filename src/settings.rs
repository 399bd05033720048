//! Game settings and preferences
//!
//! Persisted separately from profiles in the key-value store.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::PersistenceError;
use crate::persistence::{KeyValueStore, SETTINGS_KEY};

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" | "leicht" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" | "schwer" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Largest number shown in questions (smallest is always 1)
    pub fn max_value(&self) -> u32 {
        match self {
            Difficulty::Easy => 6,
            Difficulty::Normal => 9,
            Difficulty::Hard => 10,
        }
    }

    /// Points per correct answer
    pub fn score_increment(&self) -> u64 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal | Difficulty::Hard => 10,
        }
    }

    /// Length of the run shown in sequence mode
    pub fn sequence_length(&self) -> u32 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Normal | Difficulty::Hard => 4,
        }
    }

    /// Round constants for this preset
    pub fn rules(&self) -> Rules {
        Rules {
            max_value: self.max_value(),
            score_increment: self.score_increment(),
            count_options: 3,
            find_options: 5,
            sequence_options: 3,
            sequence_length: self.sequence_length(),
            memory_pairs: MEMORY_PAIRS,
            memory_max_value: MEMORY_MAX_VALUE,
            memory_bonus: MEMORY_BONUS,
            auto_regenerate_memory: true,
            reveal_delay_ms: REVEAL_DELAY_MS,
            feedback_delay_ms: FEEDBACK_DELAY_MS,
            error_cooldown_ms: ERROR_COOLDOWN_MS,
        }
    }
}

/// Everything a round needs to know about the current difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub max_value: u32,
    pub score_increment: u64,
    pub count_options: usize,
    pub find_options: usize,
    pub sequence_options: usize,
    pub sequence_length: u32,
    pub memory_pairs: usize,
    pub memory_max_value: u32,
    pub memory_bonus: u64,
    /// Deal a fresh memory board after the last pair is found
    pub auto_regenerate_memory: bool,
    pub reveal_delay_ms: u32,
    pub feedback_delay_ms: u32,
    pub error_cooldown_ms: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Difficulty::default().rules()
    }
}

/// On/off preferences a player can flip from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    AutoRegenerateMemory,
    Celebrations,
    ReducedMotion,
}

impl Preference {
    pub const ALL: [Preference; 3] = [
        Preference::AutoRegenerateMemory,
        Preference::Celebrations,
        Preference::ReducedMotion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preference::AutoRegenerateMemory => "auto-regenerate-memory",
            Preference::Celebrations => "celebrations",
            Preference::ReducedMotion => "reduced-motion",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Preference::AutoRegenerateMemory => "Neues Memory",
            Preference::Celebrations => "Jubel",
            Preference::ReducedMotion => "Weniger Bewegung",
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub difficulty: Difficulty,
    /// Deal a fresh memory board after the last pair is found
    #[serde(default = "default_true")]
    pub auto_regenerate_memory: bool,

    // === Presentation ===
    /// Show the success overlay between rounds
    #[serde(default = "default_true")]
    pub celebrations: bool,

    // === Accessibility ===
    /// Reduced motion (no shake or tilt on pictures)
    #[serde(default)]
    pub reduced_motion: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            auto_regenerate_memory: true,
            celebrations: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self, pref: Preference) -> bool {
        match pref {
            Preference::AutoRegenerateMemory => self.auto_regenerate_memory,
            Preference::Celebrations => self.celebrations,
            Preference::ReducedMotion => self.reduced_motion,
        }
    }

    /// Flip a preference, returning its new state
    pub fn toggle(&mut self, pref: Preference) -> bool {
        let flag = match pref {
            Preference::AutoRegenerateMemory => &mut self.auto_regenerate_memory,
            Preference::Celebrations => &mut self.celebrations,
            Preference::ReducedMotion => &mut self.reduced_motion,
        };
        *flag = !*flag;
        *flag
    }

    /// Effective round constants
    pub fn rules(&self) -> Rules {
        Rules {
            auto_regenerate_memory: self.auto_regenerate_memory,
            ..self.difficulty.rules()
        }
    }

    /// Load settings from the store, falling back to defaults
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(SETTINGS_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring unreadable settings: {e}"),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Settings store unreadable: {e}"),
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(self).map_err(PersistenceError::Encode)?;
        store.set(SETTINGS_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
