//! HTML fragments for the dynamic parts of each screen
//!
//! Clickable elements carry a `data-action` attribute (plus `data-id`,
//! `data-value`, `data-index` or `data-animal`) which the page-level click
//! handler dispatches on.

use std::fmt::Write;

use super::{RankEntry, text};
use crate::engine::{CardFace, MemoryBoard, SequenceRound};
use crate::profiles::{Animal, Profile};

/// Escape text for use inside element content and quoted attributes
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn profile_cards(profiles: &[&Profile]) -> String {
    if profiles.is_empty() {
        return format!(r#"<p class="empty-hint">{}</p>"#, text::NO_PROFILES);
    }
    let mut out = String::new();
    for p in profiles {
        let _ = write!(
            out,
            r#"<div class="profile-card" data-action="login" data-id="{id}"><img src="{avatar}" class="profile-avatar" alt="Avatar"><div class="profile-name">{name}</div><div class="profile-score">{score} {star}</div></div>"#,
            id = p.id,
            avatar = escape(&p.avatar),
            name = escape(&p.name),
            score = p.score,
            star = text::STAR,
        );
    }
    out
}

pub fn avatar_options(selected: Animal) -> String {
    let mut out = String::new();
    for animal in Animal::ALL {
        let class = if animal == selected {
            "avatar-option selected"
        } else {
            "avatar-option"
        };
        let _ = write!(
            out,
            r#"<img src="{}" class="{class}" data-action="pick-avatar" data-animal="{}" alt="{}">"#,
            animal.asset(),
            animal.as_str(),
            animal.as_str(),
        );
    }
    out
}

/// `count` copies of an animal picture. With `tilt` each picture gets a
/// small fixed rotation so the group looks hand-placed.
pub fn animal_group(animal: Animal, count: u32, tilt: bool) -> String {
    let class = if count > 5 {
        "animal-item small"
    } else {
        "animal-item"
    };
    let mut out = String::new();
    for i in 0..count {
        let style = if tilt {
            let degrees = (i as i32 * 7) % 21 - 10;
            format!(r#" style="transform: rotate({degrees}deg)""#)
        } else {
            String::new()
        };
        let _ = write!(
            out,
            r#"<img src="{}" class="{class}"{style} alt="{}">"#,
            animal.asset(),
            animal.as_str(),
        );
    }
    out
}

pub fn option_buttons(options: &[u32]) -> String {
    let mut out = String::new();
    for value in options {
        let _ = write!(
            out,
            r#"<button class="option-btn" data-action="answer" data-value="{value}">{value}</button>"#
        );
    }
    out
}

pub fn sequence_slots(round: &SequenceRound) -> String {
    let mut out = String::new();
    for slot in round.slots() {
        match slot {
            Some(value) => {
                let _ = write!(out, r#"<div class="sequence-slot">{value}</div>"#);
            }
            None => out.push_str(r#"<div class="sequence-slot hidden-slot">?</div>"#),
        }
    }
    out
}

pub fn memory_grid(board: &MemoryBoard) -> String {
    let mut out = String::new();
    for (index, card) in board.cards().iter().enumerate() {
        let mut class = String::from("memory-card");
        if card.face_up {
            class.push_str(" flipped");
        }
        if card.matched {
            class.push_str(" matched");
        }

        let back = match card.face {
            CardFace::Numeral => card.pair_value.to_string(),
            CardFace::Quantity => {
                let mut grid = String::from(r#"<div class="memory-mini-grid">"#);
                for _ in 0..card.pair_value {
                    let _ = write!(
                        grid,
                        r#"<img src="{}" class="memory-mini-img" alt="">"#,
                        Animal::Lion.asset()
                    );
                }
                grid.push_str("</div>");
                grid
            }
        };

        let _ = write!(
            out,
            r#"<div class="{class}" data-action="flip" data-index="{index}"><div class="memory-card-front"></div><div class="memory-card-back">{back}</div></div>"#
        );
    }
    out
}

pub fn ranking_list(entries: &[RankEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = write!(
            out,
            r#"<div class="ranking-item"><div class="ranking-who"><span class="ranking-rank">{label}</span><img src="{avatar}" class="ranking-avatar" alt=""><span>{name}</span></div><span class="ranking-score">{score} {star}</span></div>"#,
            label = entry.label,
            avatar = escape(&entry.avatar),
            name = escape(&entry.name),
            score = entry.score,
            star = text::STAR,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("Mia"), "Mia");
    }

    #[test]
    fn test_profile_cards_escape_names() {
        let p = Profile {
            id: 42,
            name: "<script>".to_string(),
            avatar: Animal::Lion.asset().to_string(),
            score: 30,
        };
        let html = profile_cards(&[&p]);
        assert!(html.contains(r#"data-id="42""#));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));

        assert!(profile_cards(&[]).contains(text::NO_PROFILES));
    }

    #[test]
    fn test_option_buttons() {
        let html = option_buttons(&[1, 5, 8]);
        assert_eq!(html.matches("data-action=\"answer\"").count(), 3);
        assert!(html.contains(r#"data-value="5">5</button>"#));
    }

    #[test]
    fn test_animal_group() {
        let html = animal_group(Animal::Giraffe, 7, false);
        assert_eq!(html.matches("<img").count(), 7);
        assert!(html.contains("animal-item small"));
        assert!(!html.contains("rotate"));

        let html = animal_group(Animal::Lion, 2, true);
        assert!(html.contains("rotate(-10deg)"));
        assert!(html.contains("rotate(-3deg)"));
    }

    #[test]
    fn test_sequence_slots() {
        let round = SequenceRound {
            start: 3,
            length: 4,
            hidden_index: 2,
            options: vec![4, 5, 8],
        };
        let html = sequence_slots(&round);
        assert_eq!(html.matches("sequence-slot").count(), 4);
        assert!(html.contains(">3<") && html.contains(">4<") && html.contains(">6<"));
        assert!(html.contains("hidden-slot\">?<"));
        assert!(!html.contains(">5<"));
    }

    #[test]
    fn test_memory_grid() {
        let mut board = MemoryBoard::from_values(&[2, 3], 1000);
        board.flip(1);
        let html = memory_grid(&board);
        assert_eq!(html.matches("data-action=\"flip\"").count(), 4);
        assert_eq!(html.matches(" flipped").count(), 1);
        // Quantity cards draw pair_value pictures: 2 + 3
        assert_eq!(html.matches("memory-mini-img").count(), 5);
    }

    #[test]
    fn test_ranking_list() {
        let entries = vec![RankEntry {
            label: "🥇".to_string(),
            name: "Mia".to_string(),
            avatar: "a.png".to_string(),
            score: 10,
        }];
        let html = ranking_list(&entries);
        assert!(html.contains("🥇") && html.contains("Mia") && html.contains("10 ⭐"));
    }
}
