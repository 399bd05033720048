//! Command handling and timed transitions
//!
//! `handle` applies one player command; `advance` moves the clock forward.
//! Both return the events produced so the caller can score, persist and render.

use super::memory::{FlipOutcome, Resolution};
use super::rounds::{Answer, Round};
use super::state::{Command, GameEvent, Mode, Phase, Session};

/// Apply a player command
pub fn handle(session: &mut Session, command: Command) -> Vec<GameEvent> {
    match command {
        Command::StartMode(mode) => start_mode(session, mode),
        Command::Answer(answer) => submit_answer(session, answer),
        Command::FlipCard(index) => flip_card(session, index),
        Command::ToMenu => to_menu(session),
    }
}

/// Advance pauses and pending reveals by `dt_ms`
pub fn advance(session: &mut Session, dt_ms: u32) -> Vec<GameEvent> {
    match session.phase {
        Phase::Cooldown { remaining_ms } => {
            session.phase = if dt_ms >= remaining_ms {
                Phase::Awaiting
            } else {
                Phase::Cooldown {
                    remaining_ms: remaining_ms - dt_ms,
                }
            };
            Vec::new()
        }
        Phase::Celebrating { remaining_ms } => {
            if dt_ms >= remaining_ms {
                next_round(session)
            } else {
                session.phase = Phase::Celebrating {
                    remaining_ms: remaining_ms - dt_ms,
                };
                Vec::new()
            }
        }
        Phase::Awaiting => resolve_memory(session, dt_ms),
        Phase::Menu | Phase::Complete => Vec::new(),
    }
}

fn start_mode(session: &mut Session, mode: Mode) -> Vec<GameEvent> {
    cancel_pending(session);
    session.mode = Some(mode);
    log::debug!("Starting mode {}", mode.as_str());
    next_round(session)
}

fn next_round(session: &mut Session) -> Vec<GameEvent> {
    let Some(mode) = session.mode else {
        session.phase = Phase::Menu;
        return Vec::new();
    };
    session.round = Some(Round::generate(mode, &session.rules, &mut session.rng));
    session.phase = Phase::Awaiting;
    vec![GameEvent::RoundStarted(mode)]
}

fn to_menu(session: &mut Session) -> Vec<GameEvent> {
    cancel_pending(session);
    session.mode = None;
    session.round = None;
    session.phase = Phase::Menu;
    vec![GameEvent::ReturnedToMenu]
}

fn cancel_pending(session: &mut Session) {
    if let Some(board) = session.round.as_mut().and_then(Round::board_mut) {
        board.cancel();
    }
}

fn submit_answer(session: &mut Session, answer: Answer) -> Vec<GameEvent> {
    if !session.accepts_input() {
        return Vec::new();
    }
    let Some(round) = &session.round else {
        return Vec::new();
    };
    if round.board().is_some() {
        return Vec::new();
    }

    if round.is_correct(answer) {
        let points = session.rules.score_increment;
        session.score = session.score.saturating_add(points);
        session.rounds_won += 1;
        session.phase = Phase::Celebrating {
            remaining_ms: session.rules.feedback_delay_ms,
        };
        vec![GameEvent::Correct {
            points,
            total: session.score,
        }]
    } else {
        session.wrong_answers += 1;
        if session.rules.error_cooldown_ms > 0 {
            session.phase = Phase::Cooldown {
                remaining_ms: session.rules.error_cooldown_ms,
            };
        }
        vec![GameEvent::Wrong]
    }
}

fn flip_card(session: &mut Session, index: usize) -> Vec<GameEvent> {
    if !session.accepts_input() {
        return Vec::new();
    }
    let Some(board) = session.round.as_mut().and_then(Round::board_mut) else {
        return Vec::new();
    };

    match board.flip(index) {
        FlipOutcome::Ignored => Vec::new(),
        FlipOutcome::First { index } => vec![GameEvent::CardFlipped { index }],
        FlipOutcome::Second { index, is_match } => vec![
            GameEvent::CardFlipped { index },
            GameEvent::PairRevealed { is_match },
        ],
    }
}

fn resolve_memory(session: &mut Session, dt_ms: u32) -> Vec<GameEvent> {
    let Some(board) = session.round.as_mut().and_then(Round::board_mut) else {
        return Vec::new();
    };
    let resolution = board.advance(dt_ms);
    let cleared = board.is_cleared();

    match resolution {
        None => Vec::new(),
        Some(Resolution::Missed) => vec![GameEvent::PairMissed],
        Some(Resolution::Matched { value, pairs_found }) => {
            let mut events = vec![GameEvent::PairMatched { value, pairs_found }];
            if cleared {
                let bonus = session.rules.memory_bonus;
                session.score = session.score.saturating_add(bonus);
                session.rounds_won += 1;
                events.push(GameEvent::BoardCleared {
                    bonus,
                    total: session.score,
                });
                session.phase = if session.rules.auto_regenerate_memory {
                    Phase::Celebrating {
                        remaining_ms: session.rules.feedback_delay_ms,
                    }
                } else {
                    Phase::Complete
                };
            }
            events
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::memory::MemoryBoard;
    use crate::engine::rounds::{CountRound, Side};
    use crate::profiles::Animal;
    use crate::settings::{Difficulty, Rules};

    fn session() -> Session {
        Session::new(Difficulty::Normal.rules(), 12345)
    }

    fn correct(session: &Session) -> Answer {
        session.round.as_ref().unwrap().correct_answer().unwrap()
    }

    fn wrong(session: &Session) -> Answer {
        match correct(session) {
            Answer::Number(n) => Answer::Number(if n == 1 { 2 } else { n - 1 }),
            Answer::Side(Side::Left) => Answer::Side(Side::Right),
            Answer::Side(Side::Right) => Answer::Side(Side::Left),
        }
    }

    #[test]
    fn test_start_mode_from_menu() {
        let mut s = session();
        assert_eq!(s.phase, Phase::Menu);
        let events = handle(&mut s, Command::StartMode(Mode::Find));
        assert_eq!(events, vec![GameEvent::RoundStarted(Mode::Find)]);
        assert_eq!(s.phase, Phase::Awaiting);
        assert_eq!(s.round.as_ref().unwrap().mode(), Mode::Find);
    }

    #[test]
    fn test_correct_answer_scores_and_advances() {
        let mut s = session();
        handle(&mut s, Command::StartMode(Mode::Count));
        let answer = correct(&s);

        let events = handle(&mut s, Command::Answer(answer));
        assert_eq!(
            events,
            vec![GameEvent::Correct {
                points: 10,
                total: 10
            }]
        );
        assert_eq!(s.score, 10);
        assert!(matches!(s.phase, Phase::Celebrating { .. }));

        // Input during the overlay is ignored
        assert!(handle(&mut s, Command::Answer(answer)).is_empty());
        assert_eq!(s.score, 10);

        assert!(advance(&mut s, 1000).is_empty());
        assert_eq!(
            advance(&mut s, 500),
            vec![GameEvent::RoundStarted(Mode::Count)]
        );
        assert_eq!(s.phase, Phase::Awaiting);
    }

    #[test]
    fn test_wrong_answer_keeps_round() {
        let mut s = session();
        handle(&mut s, Command::StartMode(Mode::Sequence));
        let before = s.round.clone();

        let miss = wrong(&s);
        let events = handle(&mut s, Command::Answer(miss));
        assert_eq!(events, vec![GameEvent::Wrong]);
        assert_eq!(s.score, 0);
        assert_eq!(s.round, before);
        assert!(matches!(s.phase, Phase::Cooldown { .. }));

        // Locked during cooldown, even for the right answer
        let answer = correct(&s);
        assert!(handle(&mut s, Command::Answer(answer)).is_empty());
        advance(&mut s, 600);
        assert_eq!(s.phase, Phase::Awaiting);
        assert_eq!(handle(&mut s, Command::Answer(answer)).len(), 1);
        assert_eq!(s.score, 10);
    }

    #[test]
    fn test_comparison_answers() {
        let mut s = session();
        handle(&mut s, Command::StartMode(Mode::Comparison));
        let (miss, answer) = (wrong(&s), correct(&s));
        let events = handle(&mut s, Command::Answer(miss));
        assert_eq!(events, vec![GameEvent::Wrong]);
        advance(&mut s, 600);
        let events = handle(&mut s, Command::Answer(answer));
        assert!(matches!(events[0], GameEvent::Correct { .. }));
    }

    #[test]
    fn test_custom_round_count_scenario() {
        let mut s = session();
        s.set_round(Round::Count(CountRound {
            count: 4,
            animal: Animal::Lion,
            options: vec![2, 4, 7],
        }));
        let events = handle(&mut s, Command::Answer(Answer::Number(4)));
        assert_eq!(events[0].points(), 10);
    }

    #[test]
    fn test_memory_pair_scenario() {
        let mut s = session();
        s.set_round(Round::Memory(MemoryBoard::from_values(&[2, 4, 5], 1000)));

        assert_eq!(
            handle(&mut s, Command::FlipCard(2)),
            vec![GameEvent::CardFlipped { index: 2 }]
        );
        assert_eq!(
            handle(&mut s, Command::FlipCard(3)),
            vec![
                GameEvent::CardFlipped { index: 3 },
                GameEvent::PairRevealed { is_match: true }
            ]
        );
        // Locked while resolving
        assert!(handle(&mut s, Command::FlipCard(0)).is_empty());

        assert_eq!(
            advance(&mut s, 1000),
            vec![GameEvent::PairMatched {
                value: 4,
                pairs_found: 1
            }]
        );
        let board = s.round.as_ref().unwrap().board().unwrap();
        assert!(!board.is_locked());
        assert_eq!(board.pairs_found(), 1);
        assert!(board.cards()[2].matched && board.cards()[3].matched);
        // Pairs alone don't score
        assert_eq!(s.score, 0);
    }

    #[test]
    fn test_memory_board_clear_awards_bonus_and_redeals() {
        let mut s = session();
        s.set_round(Round::Memory(MemoryBoard::from_values(&[1, 2, 3], 1000)));
        let mut events = Vec::new();
        for pair in 0..3 {
            handle(&mut s, Command::FlipCard(pair * 2));
            handle(&mut s, Command::FlipCard(pair * 2 + 1));
            events = advance(&mut s, 1000);
        }
        assert_eq!(
            events.last(),
            Some(&GameEvent::BoardCleared {
                bonus: 20,
                total: 20
            })
        );
        assert!(matches!(s.phase, Phase::Celebrating { .. }));

        assert_eq!(
            advance(&mut s, 1500),
            vec![GameEvent::RoundStarted(Mode::Memory)]
        );
        let board = s.round.as_ref().unwrap().board().unwrap();
        assert_eq!(board.pairs_found(), 0);
    }

    #[test]
    fn test_memory_without_regeneration_completes() {
        let rules = Rules {
            auto_regenerate_memory: false,
            ..Rules::default()
        };
        let mut s = Session::new(rules, 1);
        s.set_round(Round::Memory(MemoryBoard::from_values(&[6], 1000)));
        handle(&mut s, Command::FlipCard(1));
        handle(&mut s, Command::FlipCard(0));
        advance(&mut s, 1000);
        assert_eq!(s.phase, Phase::Complete);
        assert!(advance(&mut s, 10_000).is_empty());
    }

    #[test]
    fn test_answers_ignored_in_memory_and_flips_ignored_elsewhere() {
        let mut s = session();
        handle(&mut s, Command::StartMode(Mode::Memory));
        assert!(handle(&mut s, Command::Answer(Answer::Number(1))).is_empty());

        handle(&mut s, Command::StartMode(Mode::Find));
        assert!(handle(&mut s, Command::FlipCard(0)).is_empty());
    }

    #[test]
    fn test_to_menu_cancels_reveal() {
        let mut s = session();
        s.set_round(Round::Memory(MemoryBoard::from_values(&[2, 4, 5], 1000)));
        handle(&mut s, Command::FlipCard(0));
        handle(&mut s, Command::FlipCard(3));

        assert_eq!(
            handle(&mut s, Command::ToMenu),
            vec![GameEvent::ReturnedToMenu]
        );
        assert_eq!(s.phase, Phase::Menu);
        assert!(s.round.is_none());
        // No deferred resolution fires after leaving
        assert!(advance(&mut s, 5000).is_empty());
        // Nothing to answer from the menu
        assert!(handle(&mut s, Command::Answer(Answer::Number(1))).is_empty());
    }
}
