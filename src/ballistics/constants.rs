//! Ballistics constants - all tunable values in one place

/// Gravitational acceleration in game units
pub const GRAVITY: f64 = 9.81;

/// Distance from the target (either side) within which a shot counts as a hit
pub const HIT_TOLERANCE: f64 = 5.0;
