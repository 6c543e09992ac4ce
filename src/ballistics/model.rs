//! Range equation and hit classification
//!
//! Pure functions of their inputs: no dependence on health, turn count, or
//! any global state. Angles and velocities are never clamped; any real number
//! goes through the trigonometry as-is, so angles past 90° (or below 0°) give
//! a negative range and land behind the shooter.

use serde::{Deserialize, Serialize};

use crate::ballistics::constants::{GRAVITY, HIT_TOLERANCE};
use crate::core::types::Heading;

/// Where a shot landed relative to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// Landed within tolerance of the target
    Hit,
    /// Did not reach the target
    Short,
    /// Passed beyond the target
    Overshot,
}

/// Horizontal range of a projectile launched from ground level
///
/// `range = v² · sin(2θ) / g`, with θ converted from degrees.
pub fn projectile_range(angle_deg: f64, velocity: f64, gravity: f64) -> f64 {
    let angle_rad = angle_deg.to_radians();
    velocity * velocity * (2.0 * angle_rad).sin() / gravity
}

/// Physical constants for one match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallisticsModel {
    pub gravity: f64,
    pub hit_tolerance: f64,
}

impl Default for BallisticsModel {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            hit_tolerance: HIT_TOLERANCE,
        }
    }
}

impl BallisticsModel {
    pub fn new(gravity: f64, hit_tolerance: f64) -> Self {
        Self {
            gravity,
            hit_tolerance,
        }
    }

    /// Range of a shot under this model's gravity
    pub fn range(&self, angle_deg: f64, velocity: f64) -> f64 {
        projectile_range(angle_deg, velocity, self.gravity)
    }

    /// Landing x-coordinate of a shot fired from `shooter_position`
    ///
    /// The range is added along `heading`, which the caller fixes from the
    /// starting positions of the two sides.
    pub fn compute_impact(
        &self,
        shooter_position: f64,
        heading: Heading,
        angle_deg: f64,
        velocity: f64,
    ) -> f64 {
        shooter_position + heading.sign() * self.range(angle_deg, velocity)
    }

    /// Classify an impact against the target's position
    ///
    /// Tolerance is inclusive. Short vs. overshot is judged along the
    /// shooter's fixed heading.
    pub fn classify_shot(&self, impact: f64, target_position: f64, heading: Heading) -> ShotOutcome {
        if (impact - target_position).abs() <= self.hit_tolerance {
            return ShotOutcome::Hit;
        }

        let fell_short = match heading {
            Heading::Rightward => impact < target_position,
            Heading::Leftward => impact > target_position,
        };

        if fell_short {
            ShotOutcome::Short
        } else {
            ShotOutcome::Overshot
        }
    }
}
