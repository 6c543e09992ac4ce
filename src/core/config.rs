//! Match configuration with documented constants
//!
//! Defaults reproduce the classic duel: two castles at either edge of a
//! 100-unit field, 100 health each, 50 damage per hit.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::ballistics::constants::{GRAVITY, HIT_TOLERANCE};
use crate::core::error::{BallerburgError, Result};
use crate::game::constants::{
    FIELD_MAX, FIELD_MIN, HIT_DAMAGE, INITIAL_HEALTH, PLAYER_A_NAME, PLAYER_A_POSITION,
    PLAYER_B_NAME, PLAYER_B_POSITION,
};

/// Configuration for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    // === COMBATANTS ===
    /// Display name of the side that fires first
    pub player_a: String,

    /// Display name of the side that fires second
    pub player_b: String,

    /// Starting x of side A (field units, 0 to 100)
    pub position_a: f64,

    /// Starting x of side B (field units, 0 to 100)
    ///
    /// Must differ from `position_a`; the firing heading of both sides is
    /// derived from the two starting positions.
    pub position_b: f64,

    /// Health each side starts with
    pub initial_health: i32,

    /// Health removed from the target on every confirmed hit
    pub hit_damage: i32,

    // === BALLISTICS ===
    /// Gravitational acceleration used by the range equation
    pub gravity: f64,

    /// Maximum distance between impact and target that still counts as a hit
    pub hit_tolerance: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_a: PLAYER_A_NAME.to_string(),
            player_b: PLAYER_B_NAME.to_string(),
            position_a: PLAYER_A_POSITION,
            position_b: PLAYER_B_POSITION,
            initial_health: INITIAL_HEALTH,
            hit_damage: HIT_DAMAGE,
            gravity: GRAVITY,
            hit_tolerance: HIT_TOLERANCE,
        }
    }
}

impl MatchConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.player_a.trim().is_empty() || self.player_b.trim().is_empty() {
            return Err(BallerburgError::InvalidConfig(
                "player names must not be empty".into(),
            ));
        }

        for (label, pos) in [("position_a", self.position_a), ("position_b", self.position_b)] {
            if !(FIELD_MIN..=FIELD_MAX).contains(&pos) {
                return Err(BallerburgError::InvalidConfig(format!(
                    "{} ({}) must lie within {}..={}",
                    label, pos, FIELD_MIN, FIELD_MAX
                )));
            }
        }

        if self.position_a == self.position_b {
            return Err(BallerburgError::InvalidConfig(format!(
                "position_a and position_b must differ (both {})",
                self.position_a
            )));
        }

        if self.initial_health <= 0 || self.hit_damage <= 0 {
            return Err(BallerburgError::InvalidConfig(format!(
                "initial_health ({}) and hit_damage ({}) must be positive",
                self.initial_health, self.hit_damage
            )));
        }

        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(BallerburgError::InvalidConfig(format!(
                "gravity ({}) must be positive",
                self.gravity
            )));
        }

        if !(self.hit_tolerance.is_finite() && self.hit_tolerance >= 0.0) {
            return Err(BallerburgError::InvalidConfig(format!(
                "hit_tolerance ({}) must not be negative",
                self.hit_tolerance
            )));
        }

        Ok(())
    }

    /// Parse and validate a config from TOML text
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: MatchConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }
}
