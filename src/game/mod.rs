//! The duel itself: castles, turns, input, and the battlefield view

pub mod combatant;
pub mod constants;
pub mod input;
pub mod render;
pub mod report;
pub mod state;

pub use combatant::Combatant;
pub use input::{parse_shot, LineSource, ShotInput, TurnSource};
pub use render::render_battlefield;
pub use report::{EndReason, MatchOutcome, MatchReport, TurnAction, TurnRecord};
pub use state::Match;
