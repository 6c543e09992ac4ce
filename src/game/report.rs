//! Turn-by-turn record of a match, serializable for headless runs

use serde::{Deserialize, Serialize};

use crate::ballistics::ShotOutcome;
use crate::core::types::Side;
use crate::game::input::ShotInput;

/// What happened on one turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnAction {
    Fired {
        shot: ShotInput,
        impact: f64,
        outcome: ShotOutcome,
        /// Target health after the shot resolved
        target_health: i32,
    },
    /// Malformed input; no shot fired
    Forfeited,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based round number; A and B share a round
    pub round: u32,
    pub shooter: Side,
    pub action: TurnAction,
}

/// Why the match loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// A side's health reached zero or below
    Defeat,
    /// The input stream ended before anyone fell
    InputExhausted,
}

/// Final result of `Match::run`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: Side,
    pub reason: EndReason,
}

/// Summary emitted by `--format json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub winner: String,
    pub winner_side: Side,
    pub reason: EndReason,
    pub rounds: u32,
    pub final_health: FinalHealth,
    pub turns: Vec<TurnRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalHealth {
    pub a: i32,
    pub b: i32,
}

impl MatchReport {
    /// Number of shots that hit, per side
    pub fn hits_by(&self, side: Side) -> usize {
        self.turns
            .iter()
            .filter(|t| t.shooter == side)
            .filter(|t| {
                matches!(
                    t.action,
                    TurnAction::Fired {
                        outcome: ShotOutcome::Hit,
                        ..
                    }
                )
            })
            .count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
