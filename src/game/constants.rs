//! Match constants

// Combatants
pub const INITIAL_HEALTH: i32 = 100;
pub const HIT_DAMAGE: i32 = 50;
pub const PLAYER_A_NAME: &str = "Player 1";
pub const PLAYER_B_NAME: &str = "Player 2";

// Battlefield (field units)
pub const FIELD_MIN: f64 = 0.0;
pub const FIELD_MAX: f64 = 100.0;
pub const PLAYER_A_POSITION: f64 = FIELD_MIN;
pub const PLAYER_B_POSITION: f64 = FIELD_MAX;

// Rendering (terminal columns)
pub const FIELD_WIDTH: usize = 60;
