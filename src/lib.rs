//! Ballerburg - two castles, one cannon each, turn-based artillery

pub mod ballistics;
pub mod core;
pub mod game;
