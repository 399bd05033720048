//! Zahlen-Safari entry point
//!
//! Browser: wires the DOM to the app and runs the frame loop.
//! Native: plays the same game in the terminal.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent, MouseEvent};

    use zahlen_safari::engine::{Answer, GameEvent, Mode, Phase, Round, Side};
    use zahlen_safari::persistence::LocalStore;
    use zahlen_safari::profiles::Animal;
    use zahlen_safari::settings::{Difficulty, Preference};
    use zahlen_safari::ui::{self, Screen, html, text};
    use zahlen_safari::{App, platform};

    /// Longest frame step fed to the engine (tab switches stall the loop)
    const MAX_FRAME_MS: f64 = 250.0;

    fn document() -> Result<Document, JsValue> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))
    }

    fn set_html(doc: &Document, id: &str, markup: &str) {
        if let Some(el) = doc.get_element_by_id(id) {
            el.set_inner_html(markup);
        }
    }

    fn set_text(doc: &Document, id: &str, value: &str) {
        if let Some(el) = doc.get_element_by_id(id) {
            el.set_text_content(Some(value));
        }
    }

    fn set_class(doc: &Document, id: &str, class: &str, on: bool) -> Result<(), JsValue> {
        if let Some(el) = doc.get_element_by_id(id) {
            el.class_list().toggle_with_force(class, on)?;
        }
        Ok(())
    }

    fn attr<T: std::str::FromStr>(el: &Element, name: &str) -> Option<T> {
        el.get_attribute(name).and_then(|v| v.parse().ok())
    }

    /// Game instance holding all state
    struct Game {
        app: App<LocalStore>,
        last_time: f64,
        last_phase: Phase,
        feedback_message: &'static str,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                app: App::new(LocalStore, seed),
                last_time: 0.0,
                last_phase: Phase::Menu,
                feedback_message: text::SUCCESS_MESSAGE,
            }
        }

        /// Run the action named by a clicked element's `data-action`
        fn dispatch(&mut self, action: &str, el: &Element) -> Vec<GameEvent> {
            match action {
                "login" => {
                    if let Some(id) = attr::<u64>(el, "data-id") {
                        if let Err(e) = self.app.login(id) {
                            log::warn!("Login failed: {e}");
                        }
                    }
                    Vec::new()
                }
                "show-create" => {
                    self.app.show_create_profile();
                    if let Some(input) = self.name_input() {
                        let _ = input.focus();
                    }
                    Vec::new()
                }
                "pick-avatar" => {
                    if let Some(animal) = el
                        .get_attribute("data-animal")
                        .and_then(|s| Animal::from_str(&s))
                    {
                        self.app.select_avatar(animal);
                    }
                    Vec::new()
                }
                "create-profile" => {
                    self.create_profile();
                    Vec::new()
                }
                "start" => match el.get_attribute("data-mode").and_then(|s| Mode::from_str(&s)) {
                    Some(mode) => self.app.start_mode(mode),
                    None => Vec::new(),
                },
                "answer" => match attr::<u32>(el, "data-value") {
                    Some(value) => self.app.answer(Answer::Number(value)),
                    None => Vec::new(),
                },
                "compare" => match el.get_attribute("data-side").and_then(|s| Side::from_str(&s)) {
                    Some(side) => self.app.answer(Answer::Side(side)),
                    None => Vec::new(),
                },
                "flip" => match attr::<usize>(el, "data-index") {
                    Some(index) => self.app.flip(index),
                    None => Vec::new(),
                },
                "difficulty" => {
                    if let Some(d) = el
                        .get_attribute("data-value")
                        .and_then(|s| Difficulty::from_str(&s))
                    {
                        self.app.set_difficulty(d);
                    }
                    Vec::new()
                }
                "toggle" => {
                    if let Some(pref) = el
                        .get_attribute("data-pref")
                        .and_then(|s| Preference::from_str(&s))
                    {
                        self.app.toggle_preference(pref);
                    }
                    Vec::new()
                }
                "rankings" => {
                    self.app.show_rankings();
                    Vec::new()
                }
                "logout" => {
                    self.app.logout();
                    Vec::new()
                }
                "back" => self.app.back(),
                other => {
                    log::debug!("Unhandled action: {other}");
                    Vec::new()
                }
            }
        }

        fn name_input(&self) -> Option<HtmlInputElement> {
            document()
                .ok()?
                .get_element_by_id("new-profile-name")?
                .dyn_into::<HtmlInputElement>()
                .ok()
        }

        fn create_profile(&mut self) {
            let Some(input) = self.name_input() else {
                return;
            };
            match self.app.create_profile(&input.value()) {
                Ok(profile) => {
                    input.set_value("");
                    log::info!("Welcome, {}", profile.name);
                }
                Err(e) => log::info!("Profile not created: {e}"),
            }
        }

        /// React to events: notices and overlay text
        fn after(&mut self, events: &[GameEvent]) {
            for event in events {
                match event {
                    GameEvent::Correct { .. } => self.feedback_message = text::SUCCESS_MESSAGE,
                    GameEvent::BoardCleared { .. } => {
                        self.feedback_message = text::BOARD_CLEARED_MESSAGE
                    }
                    _ => {}
                }
            }
            for notice in self.app.take_notices() {
                platform::notify_blocking(&notice);
            }
        }

        fn render(&self) -> Result<(), JsValue> {
            let doc = document()?;
            let app = &self.app;
            let screen = app.screen();

            for s in Screen::ALL {
                set_class(&doc, s.element_id(), "active", s == screen)?;
            }
            set_class(&doc, "back-button", "hidden", !screen.shows_back_button())?;

            // Header
            let header = app.header();
            set_class(&doc, "user-display", "hidden", header.is_none())?;
            set_class(&doc, "score-display", "hidden", header.is_none())?;
            if let Some(h) = header {
                set_text(&doc, "current-user-name", &h.name);
                set_text(&doc, "score-value", &h.score.to_string());
                if let Some(img) = doc.get_element_by_id("current-user-avatar") {
                    img.set_attribute("src", &h.avatar)?;
                }
            }

            match screen {
                Screen::ProfileSelect => {
                    let cards = html::profile_cards(&app.profiles().ranked());
                    set_html(&doc, "profile-list", &cards);
                }
                Screen::CreateProfile => {
                    let options = html::avatar_options(app.selected_avatar());
                    set_html(&doc, "avatar-options", &options);
                }
                Screen::Ranking => {
                    set_html(&doc, "ranking-list", &html::ranking_list(&app.rankings()));
                }
                Screen::Play(_) => self.render_round(&doc)?,
                Screen::Menu => self.render_preferences(&doc)?,
            }

            let celebrating = app.settings().celebrations
                && matches!(app.session().phase, Phase::Celebrating { .. });
            if celebrating {
                set_text(&doc, "feedback-emoji", text::SUCCESS_EMOJI);
                set_text(&doc, "feedback-message", self.feedback_message);
            }
            set_class(&doc, "feedback-overlay", "visible", celebrating)?;
            Ok(())
        }

        fn render_preferences(&self, doc: &Document) -> Result<(), JsValue> {
            let settings = self.app.settings();
            for pref in Preference::ALL {
                let id = format!("toggle-{}", pref.as_str());
                let on = settings.is_enabled(pref);
                set_class(doc, &id, "on", on)?;
                if let Some(el) = doc.get_element_by_id(&id) {
                    el.set_attribute("aria-pressed", if on { "true" } else { "false" })?;
                }
            }
            Ok(())
        }

        fn render_round(&self, doc: &Document) -> Result<(), JsValue> {
            let tilt = !self.app.settings().reduced_motion;
            let awaiting = self.app.session().accepts_input();
            match &self.app.session().round {
                Some(Round::Count(r)) => {
                    set_html(doc, "animal-display", &html::animal_group(r.animal, r.count, tilt));
                    set_html(doc, "answer-options", &html::option_buttons(&r.options));
                }
                Some(Round::Find(r)) => {
                    set_text(doc, "target-number", &r.target.to_string());
                    set_html(doc, "find-options", &html::option_buttons(&r.options));
                }
                Some(Round::Sequence(r)) => {
                    set_html(doc, "sequence-display", &html::sequence_slots(r));
                    set_html(doc, "sequence-options", &html::option_buttons(&r.options));
                }
                Some(Round::Comparison(r)) => {
                    let left = html::animal_group(r.left_animal, r.left, false);
                    let right = html::animal_group(r.right_animal, r.right, false);
                    set_html(doc, "compare-left", &left);
                    set_html(doc, "compare-right", &right);
                    if awaiting {
                        set_class(doc, "compare-left", "shake", false)?;
                        set_class(doc, "compare-right", "shake", false)?;
                    }
                }
                Some(Round::Memory(board)) => {
                    set_html(doc, "memory-grid", &html::memory_grid(board));
                }
                None => {}
            }
            Ok(())
        }

        fn render_logged(&self) {
            if let Err(e) = self.render() {
                log::warn!("Render error: {:?}", e);
            }
        }
    }

    /// Mark the clicked answer as wrong (cleared on the next re-render)
    fn shake(el: &Element) {
        let _ = el.class_list().add_2("shake", "wrong");
    }

    pub fn run() -> Result<(), JsValue> {
        platform::init_logging();
        log::info!("Zahlen-Safari starting...");

        let seed = platform::now_ms();
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        let document = document()?;
        setup_click_handler(&document, game.clone())?;
        setup_keyboard(&document, game.clone())?;

        if let Some(loading) = document.get_element_by_id("loading") {
            loading.class_list().add_1("hidden")?;
        }
        game.borrow().render_logged();

        request_animation_frame(game);
        log::info!("Zahlen-Safari running!");
        Ok(())
    }

    fn setup_click_handler(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Ok(Some(el)) = target.closest("[data-action]") else {
                return;
            };
            let Some(action) = el.get_attribute("data-action") else {
                return;
            };

            let mut g = game.borrow_mut();
            let events = g.dispatch(&action, &el);
            g.after(&events);
            g.last_phase = g.app.session().phase;
            g.render_logged();

            if events.contains(&GameEvent::Wrong) && !g.app.settings().reduced_motion {
                // Option buttons were re-rendered, find the new one
                let selector = match action.as_str() {
                    "answer" => el
                        .get_attribute("data-value")
                        .map(|v| format!("[data-action=\"answer\"][data-value=\"{v}\"]")),
                    _ => el.get_attribute("id").map(|id| format!("#{id}")),
                };
                if let Some(found) = selector.and_then(|s| document_query(&s)) {
                    shake(&found);
                }
            }
        });
        document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn document_query(selector: &str) -> Option<Element> {
        document().ok()?.query_selector(selector).ok().flatten()
    }

    fn setup_keyboard(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            let screen = g.app.screen();
            let key = event.key();
            let events = match (screen, key.as_str()) {
                (_, "Escape") => g.app.back(),
                (Screen::CreateProfile, "Enter") => {
                    g.create_profile();
                    Vec::new()
                }
                (Screen::Play(Mode::Comparison), "ArrowLeft") => {
                    g.app.answer(Answer::Side(Side::Left))
                }
                (Screen::Play(Mode::Comparison), "ArrowRight") => {
                    g.app.answer(Answer::Side(Side::Right))
                }
                (Screen::Play(Mode::Count | Mode::Find | Mode::Sequence), k) => {
                    let max_value = g.app.session().rules.max_value;
                    match ui::key_answer(k, max_value) {
                        Some(value) => g.app.answer(Answer::Number(value)),
                        None => return,
                    }
                }
                _ => return,
            };
            g.after(&events);
            g.last_phase = g.app.session().phase;
            g.render_logged();
        });
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                (time - g.last_time).clamp(0.0, MAX_FRAME_MS)
            } else {
                0.0
            };
            g.last_time = time;

            let events = g.app.tick(dt as u32);
            let phase = g.app.session().phase;
            if !events.is_empty() || phase != g.last_phase {
                g.after(&events);
                g.last_phase = phase;
                g.render_logged();
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = web_game::run() {
        log::error!("Start-up failed: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod console_game {
    use std::io::{self, BufRead, Write};

    use zahlen_safari::engine::{Answer, CardFace, GameEvent, Mode, Phase, Round, Side};
    use zahlen_safari::persistence::FileStore;
    use zahlen_safari::profiles::Animal;
    use zahlen_safari::settings::{Difficulty, Preference};
    use zahlen_safari::ui::{Screen, text};
    use zahlen_safari::{App, platform};

    /// Environment variable naming the save directory
    const DATA_DIR_ENV: &str = "ZAHLEN_SAFARI_DATA";
    const DEFAULT_DATA_DIR: &str = ".zahlen-safari";

    fn emoji(animal: Animal) -> &'static str {
        match animal {
            Animal::Lion => "🦁",
            Animal::Elephant => "🐘",
            Animal::Giraffe => "🦒",
        }
    }

    fn group(animal: Animal, count: u32) -> String {
        emoji(animal).repeat(count as usize)
    }

    fn show_options(options: &[u32]) -> String {
        options
            .iter()
            .map(|v| format!("[{v}]"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    struct Console<R: BufRead> {
        app: App<FileStore>,
        input: R,
    }

    impl<R: BufRead> Console<R> {
        /// Read one trimmed line; `None` at end of input
        fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
            print!("{label} > ");
            io::stdout().flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            Ok(Some(line.trim().to_string()))
        }

        fn flush_notices(&mut self) {
            for notice in self.app.take_notices() {
                platform::notify_blocking(&notice);
            }
        }

        /// Returns false when the player quits
        fn step(&mut self) -> io::Result<bool> {
            let keep_going = match self.app.screen() {
                Screen::ProfileSelect => self.profile_select()?,
                Screen::CreateProfile => self.create_profile()?,
                Screen::Menu => self.menu()?,
                Screen::Ranking => {
                    self.print_rankings();
                    self.app.back();
                    true
                }
                Screen::Play(Mode::Memory) => self.play_memory()?,
                Screen::Play(_) => self.play_question()?,
            };
            self.flush_notices();
            Ok(keep_going)
        }

        fn profile_select(&mut self) -> io::Result<bool> {
            println!("\n=== Zahlen-Safari ===");
            let ranked: Vec<(u64, String)> = self
                .app
                .profiles()
                .ranked()
                .iter()
                .map(|p| {
                    let icon = Animal::from_asset(&p.avatar).map_or("", emoji);
                    (p.id, format!("{icon} {} ({} {})", p.name, p.score, text::STAR))
                })
                .collect();
            if ranked.is_empty() {
                println!("{}", text::NO_PROFILES);
            }
            for (i, (_, label)) in ranked.iter().enumerate() {
                println!("  {}) {label}", i + 1);
            }
            println!("  n) Neues Profil   q) Beenden");

            let Some(choice) = self.prompt("Wer spielt?")? else {
                return Ok(false);
            };
            match choice.as_str() {
                "q" => return Ok(false),
                "n" => self.app.show_create_profile(),
                other => {
                    let picked = other
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(1))
                        .and_then(|i| ranked.get(i));
                    if let Some((id, _)) = picked {
                        if let Err(e) = self.app.login(*id) {
                            log::warn!("Login failed: {e}");
                        }
                    }
                }
            }
            Ok(true)
        }

        fn create_profile(&mut self) -> io::Result<bool> {
            let Some(name) = self.prompt("Name")? else {
                return Ok(false);
            };
            for (i, animal) in Animal::ALL.iter().enumerate() {
                println!("  {}) {} {}", i + 1, emoji(*animal), animal.as_str());
            }
            let Some(choice) = self.prompt("Tier")? else {
                return Ok(false);
            };
            let animal = choice
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| Animal::ALL.get(i).copied())
                .unwrap_or(Animal::Lion);
            self.app.select_avatar(animal);

            if let Err(e) = self.app.create_profile(&name) {
                log::info!("Profile not created: {e}");
                self.app.back();
            }
            Ok(true)
        }

        fn menu(&mut self) -> io::Result<bool> {
            if let Some(h) = self.app.header() {
                println!("\n{} - {} {}", h.name, h.score, text::STAR);
            }
            for (i, mode) in Mode::ALL.iter().enumerate() {
                println!("  {}) {}", i + 1, mode.as_str());
            }
            println!(
                "  r) Rangliste   d) Schwierigkeit ({})   e) Einstellungen",
                self.app.settings().difficulty.as_str()
            );
            println!("  l) Abmelden   q) Beenden");

            let Some(choice) = self.prompt("Spiel")? else {
                return Ok(false);
            };
            match choice.as_str() {
                "q" => return Ok(false),
                "r" => self.app.show_rankings(),
                "e" => return self.preferences(),
                "l" => self.app.logout(),
                "d" => {
                    let next = match self.app.settings().difficulty {
                        Difficulty::Easy => Difficulty::Normal,
                        Difficulty::Normal => Difficulty::Hard,
                        Difficulty::Hard => Difficulty::Easy,
                    };
                    self.app.set_difficulty(next);
                }
                other => {
                    let mode = other
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(1))
                        .and_then(|i| Mode::ALL.get(i).copied());
                    if let Some(mode) = mode {
                        self.app.start_mode(mode);
                    }
                }
            }
            Ok(true)
        }

        fn preferences(&mut self) -> io::Result<bool> {
            for (i, pref) in Preference::ALL.iter().enumerate() {
                let state = if self.app.settings().is_enabled(*pref) { "an" } else { "aus" };
                println!("  {}) {}: {state}", i + 1, pref.label());
            }
            let Some(choice) = self.prompt("Umschalten")? else {
                return Ok(false);
            };
            let pref = choice
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| Preference::ALL.get(i).copied());
            if let Some(pref) = pref {
                self.app.toggle_preference(pref);
            }
            Ok(true)
        }

        fn print_rankings(&self) {
            println!("\n=== Rangliste ===");
            for entry in self.app.rankings() {
                println!(
                    "  {:>4}  {:<16} {} {}",
                    entry.label,
                    entry.name,
                    entry.score,
                    text::STAR
                );
            }
        }

        fn play_question(&mut self) -> io::Result<bool> {
            let Some(round) = self.app.session().round.clone() else {
                self.app.back();
                return Ok(true);
            };
            match &round {
                Round::Count(r) => {
                    println!("\nWie viele Tiere?  {}", group(r.animal, r.count));
                    println!("  {}", show_options(&r.options));
                }
                Round::Find(r) => {
                    println!("\nFinde die {}!", r.target);
                    println!("  {}", show_options(&r.options));
                }
                Round::Sequence(r) => {
                    let slots: Vec<String> = r
                        .slots()
                        .iter()
                        .map(|s| s.map_or_else(|| "?".to_string(), |v| v.to_string()))
                        .collect();
                    println!("\nWelche Zahl fehlt?  {}", slots.join(" "));
                    println!("  {}", show_options(&r.options));
                }
                Round::Comparison(r) => {
                    println!("\nWo sind mehr Tiere?  (l / r)");
                    println!("  l: {}", group(r.left_animal, r.left));
                    println!("  r: {}", group(r.right_animal, r.right));
                }
                Round::Memory(_) => return Ok(true),
            }

            let Some(choice) = self.prompt("Antwort (b = zurück)")? else {
                return Ok(false);
            };
            let answer = match choice.as_str() {
                "b" => {
                    self.app.back();
                    return Ok(true);
                }
                "l" => Answer::Side(Side::Left),
                "r" => Answer::Side(Side::Right),
                other => match other.parse::<u32>() {
                    Ok(value) => Answer::Number(value),
                    Err(_) => return Ok(true),
                },
            };

            let events = self.app.answer(answer);
            self.report(&events);
            self.settle();
            Ok(true)
        }

        fn play_memory(&mut self) -> io::Result<bool> {
            if self.app.session().phase == Phase::Complete {
                println!("{}", text::BOARD_CLEARED_MESSAGE);
                self.app.back();
                return Ok(true);
            }
            let Some(board) = self.app.session().round.as_ref().and_then(Round::board) else {
                self.app.back();
                return Ok(true);
            };

            let cells: Vec<String> = board
                .cards()
                .iter()
                .enumerate()
                .map(|(i, card)| {
                    if card.matched {
                        "[  ✓  ]".to_string()
                    } else if card.face_up {
                        match card.face {
                            CardFace::Numeral => format!("[  {}  ]", card.pair_value),
                            CardFace::Quantity => {
                                format!("[{}x{}]", emoji(Animal::Lion), card.pair_value)
                            }
                        }
                    } else {
                        format!("[ {}?  ]", i + 1)
                    }
                })
                .collect();
            println!("\nPaare: {}/{}", board.pairs_found(), board.pair_count());
            println!("  {}", cells.join(" "));

            let Some(choice) = self.prompt("Karte (b = zurück)")? else {
                return Ok(false);
            };
            if choice == "b" {
                self.app.back();
                return Ok(true);
            }
            let Some(index) = choice.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
                return Ok(true);
            };

            let events = self.app.flip(index);
            self.report(&events);
            self.settle();
            Ok(true)
        }

        /// Let pending pauses run out before the next prompt
        fn settle(&mut self) {
            let rules = self.app.session().rules;
            let pause = rules
                .reveal_delay_ms
                .max(rules.feedback_delay_ms)
                .max(rules.error_cooldown_ms);
            for _ in 0..3 {
                match self.app.session().phase {
                    Phase::Awaiting => {
                        let board_locked = self
                            .app
                            .session()
                            .round
                            .as_ref()
                            .and_then(Round::board)
                            .is_some_and(|b| b.is_locked());
                        if !board_locked {
                            return;
                        }
                    }
                    Phase::Menu | Phase::Complete => return,
                    Phase::Cooldown { .. } | Phase::Celebrating { .. } => {}
                }
                let events = self.app.tick(pause);
                self.report(&events);
            }
        }

        fn report(&self, events: &[GameEvent]) {
            for event in events {
                match event {
                    GameEvent::Correct { points, total } => println!(
                        "{} {} +{points} ({total} {})",
                        text::SUCCESS_EMOJI,
                        text::SUCCESS_MESSAGE,
                        text::STAR
                    ),
                    GameEvent::Wrong => println!("Leider falsch, versuch es nochmal!"),
                    GameEvent::PairRevealed { is_match: true } => println!("Ein Paar!"),
                    GameEvent::PairMissed => println!("Kein Paar."),
                    GameEvent::BoardCleared { bonus, total } => println!(
                        "{} {} +{bonus} ({total} {})",
                        text::SUCCESS_EMOJI,
                        text::BOARD_CLEARED_MESSAGE,
                        text::STAR
                    ),
                    _ => {}
                }
            }
        }
    }

    pub fn run() -> io::Result<()> {
        let dir = std::env::var(DATA_DIR_ENV).unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        log::info!("Using save directory {dir}");

        let stdin = io::stdin();
        let mut console = Console {
            app: App::new(FileStore::new(dir), platform::now_ms()),
            input: stdin.lock(),
        };
        while console.step()? {}
        println!("Tschüss!");
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    zahlen_safari::platform::init_logging();
    log::info!("Zahlen-Safari (console) starting...");

    if let Err(e) = console_game::run() {
        log::error!("Console error: {e}");
        std::process::exit(1);
    }
}
