//! Game logic
//!
//! Pure and browser-free:
//! - Seeded RNG only
//! - Time passes only through `advance`
//! - No rendering or storage dependencies

pub mod memory;
pub mod question;
pub mod rounds;
pub mod state;
pub mod tick;

pub use memory::{CardFace, FlipOutcome, MemoryBoard, MemoryCard, Resolution, RevealState};
pub use question::generate_options;
pub use rounds::{Answer, ComparisonRound, CountRound, FindRound, Round, SequenceRound, Side};
pub use state::{Command, GameEvent, Mode, Phase, Session};
pub use tick::{advance, handle};
