//! Attack and defend moves as values.
//!
//! The dispute control logic picks a move; this only computes where it lands.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::position::{Position, PositionError};

/// The two moves a participant can make against a claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    /// Dispute the claim one level deeper (left child).
    Attack,
    /// Support the claim without attacking it.
    Defend,
}

impl MoveKind {
    /// Position the move targets when made against `position`.
    #[inline]
    pub fn apply(self, position: Position) -> Result<Position, PositionError> {
        match self {
            MoveKind::Attack => position.attack(),
            MoveKind::Defend => position.defend(),
        }
    }

    /// Whether this is an attack.
    #[inline]
    pub fn is_attack(self) -> bool {
        matches!(self, MoveKind::Attack)
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveKind::Attack => f.write_str("attack"),
            MoveKind::Defend => f.write_str("defend"),
        }
    }
}
