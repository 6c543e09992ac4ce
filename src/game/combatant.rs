//! A castle on the battlefield

use serde::{Deserialize, Serialize};

/// One side of the duel
///
/// Health may go negative after a lethal hit; nothing floors it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    /// Horizontal position, fixed for the whole match
    pub position: f64,
    pub health: i32,
}

impl Combatant {
    pub fn new(name: impl Into<String>, position: f64, health: i32) -> Self {
        Self {
            name: name.into(),
            position,
            health,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Subtract `damage` from health
    pub(crate) fn take_damage(&mut self, damage: i32) {
        self.health -= damage;
    }
}
