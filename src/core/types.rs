//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// One of the two sides of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// The side being fired upon when `self` shoots
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Direction a shot travels along the battlefield
///
/// Fixed per side at match start from the two starting positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    /// Toward increasing x
    Rightward,
    /// Toward decreasing x
    Leftward,
}

impl Heading {
    /// Heading of a shooter at `from` aiming at an opponent at `to`
    pub fn between(from: f64, to: f64) -> Self {
        if from < to {
            Heading::Rightward
        } else {
            Heading::Leftward
        }
    }

    /// +1.0 for rightward, -1.0 for leftward
    pub fn sign(self) -> f64 {
        match self {
            Heading::Rightward => 1.0,
            Heading::Leftward => -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Side::A.opponent(), Side::B);
        assert_eq!(Side::B.opponent(), Side::A);
        assert_eq!(Side::A.opponent().opponent(), Side::A);
    }

    #[test]
    fn test_heading_between() {
        assert_eq!(Heading::between(0.0, 100.0), Heading::Rightward);
        assert_eq!(Heading::between(100.0, 0.0), Heading::Leftward);
        assert_eq!(Heading::between(30.0, 30.0), Heading::Leftward);
    }

    #[test]
    fn test_heading_sign() {
        assert_eq!(Heading::Rightward.sign(), 1.0);
        assert_eq!(Heading::Leftward.sign(), -1.0);
    }
}
