//! Application flow
//!
//! Owns the store, the profile registry and the session, moves between
//! screens, and acts as the score sink: every event carrying points is
//! applied to the active profile and persisted right away. Storage failures
//! never stop play; they queue a notice for the player instead.

use crate::engine::{self, Answer, Command, GameEvent, Mode, Session};
use crate::error::ProfileError;
use crate::persistence::KeyValueStore;
use crate::profiles::{Animal, Profile, ProfileRegistry};
use crate::settings::{Difficulty, Preference, Settings};
use crate::ui::{HeaderView, RankEntry, Screen, rank_label, text};

pub struct App<S: KeyValueStore> {
    store: S,
    settings: Settings,
    profiles: ProfileRegistry,
    session: Session,
    screen: Screen,
    active: Option<u64>,
    selected_avatar: Animal,
    notices: Vec<String>,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(store: S, seed: u64) -> Self {
        let settings = Settings::load(&store);
        let profiles = ProfileRegistry::load(&store);
        let session = Session::new(settings.rules(), seed);
        Self {
            store,
            settings,
            profiles,
            session,
            screen: Screen::ProfileSelect,
            active: None,
            selected_avatar: Animal::Lion,
            notices: Vec::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn profiles(&self) -> &ProfileRegistry {
        &self.profiles
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn active_profile(&self) -> Option<&Profile> {
        self.active.and_then(|id| self.profiles.get(id))
    }

    pub fn selected_avatar(&self) -> Animal {
        self.selected_avatar
    }

    /// Notices the player must acknowledge, oldest first
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    // === Profiles ===

    pub fn show_profiles(&mut self) {
        engine::handle(&mut self.session, Command::ToMenu);
        self.active = None;
        self.screen = Screen::ProfileSelect;
    }

    pub fn show_create_profile(&mut self) {
        self.selected_avatar = Animal::Lion;
        self.screen = Screen::CreateProfile;
    }

    pub fn select_avatar(&mut self, animal: Animal) {
        self.selected_avatar = animal;
    }

    /// Create a profile with the selected avatar and log it in
    pub fn create_profile(&mut self, name: &str) -> Result<Profile, ProfileError> {
        let now = crate::platform::now_ms();
        let profile = match self
            .profiles
            .add_profile(name, self.selected_avatar.asset(), now)
        {
            Ok(profile) => profile,
            Err(e) => {
                if matches!(e, ProfileError::EmptyName) {
                    self.notices.push(text::EMPTY_NAME.to_string());
                }
                return Err(e);
            }
        };
        self.persist();
        self.login(profile.id)?;
        Ok(profile)
    }

    pub fn login(&mut self, id: u64) -> Result<(), ProfileError> {
        let profile = self
            .profiles
            .get(id)
            .ok_or(ProfileError::UnknownProfile(id))?;
        log::info!("Logged in as {}", profile.name);
        self.session.begin(profile.score);
        self.active = Some(id);
        self.screen = Screen::Menu;
        Ok(())
    }

    pub fn logout(&mut self) {
        self.show_profiles();
    }

    pub fn show_rankings(&mut self) {
        self.screen = Screen::Ranking;
    }

    pub fn rankings(&self) -> Vec<RankEntry> {
        self.profiles
            .ranked()
            .into_iter()
            .enumerate()
            .map(|(i, p)| RankEntry {
                label: rank_label(i + 1),
                name: p.name.clone(),
                avatar: p.avatar.clone(),
                score: p.score,
            })
            .collect()
    }

    pub fn header(&self) -> Option<HeaderView> {
        self.active_profile().map(|p| HeaderView {
            name: p.name.clone(),
            avatar: p.avatar.clone(),
            score: self.session.score,
        })
    }

    // === Settings ===

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
        self.apply_settings();
    }

    /// Flip a preference and persist it, returning the new state
    pub fn toggle_preference(&mut self, pref: Preference) -> bool {
        let enabled = self.settings.toggle(pref);
        log::info!("{} {}", pref.as_str(), if enabled { "on" } else { "off" });
        self.apply_settings();
        enabled
    }

    fn apply_settings(&mut self) {
        self.session.rules = self.settings.rules();
        if let Err(e) = self.settings.save(&mut self.store) {
            log::error!("Failed to save settings: {e}");
            self.notices.push(text::SAVE_FAILED.to_string());
        }
    }

    // === Play ===

    /// Menu, or the profile list when nobody is logged in
    pub fn back(&mut self) -> Vec<GameEvent> {
        match self.screen {
            Screen::CreateProfile => {
                self.screen = Screen::ProfileSelect;
                Vec::new()
            }
            Screen::Play(_) | Screen::Ranking => {
                let events = engine::handle(&mut self.session, Command::ToMenu);
                self.screen = if self.active.is_some() {
                    Screen::Menu
                } else {
                    Screen::ProfileSelect
                };
                events
            }
            Screen::ProfileSelect | Screen::Menu => Vec::new(),
        }
    }

    pub fn start_mode(&mut self, mode: Mode) -> Vec<GameEvent> {
        self.screen = Screen::Play(mode);
        self.run(Command::StartMode(mode))
    }

    pub fn answer(&mut self, answer: Answer) -> Vec<GameEvent> {
        self.run(Command::Answer(answer))
    }

    pub fn flip(&mut self, index: usize) -> Vec<GameEvent> {
        self.run(Command::FlipCard(index))
    }

    /// Advance timed transitions by `dt_ms`
    pub fn tick(&mut self, dt_ms: u32) -> Vec<GameEvent> {
        let events = engine::advance(&mut self.session, dt_ms);
        self.record(&events);
        events
    }

    fn run(&mut self, command: Command) -> Vec<GameEvent> {
        let events = engine::handle(&mut self.session, command);
        self.record(&events);
        events
    }

    /// Score sink
    fn record(&mut self, events: &[GameEvent]) {
        let points: u64 = events.iter().map(GameEvent::points).sum();
        if points == 0 {
            return;
        }
        let Some(id) = self.active else {
            return;
        };
        match self.profiles.add_points(id, points) {
            Ok(score) => {
                log::debug!("Profile {id} now at {score}");
                self.persist();
            }
            Err(e) => log::warn!("Score not recorded: {e}"),
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.profiles.save(&mut self.store) {
            log::error!("Failed to save profiles: {e}");
            self.notices.push(text::SAVE_FAILED.to_string());
        }
    }
}
