//! Projectile range and shot classification

pub mod constants;
pub mod model;

pub use constants::{GRAVITY, HIT_TOLERANCE};
pub use model::{projectile_range, BallisticsModel, ShotOutcome};
