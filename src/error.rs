//! Error types for the engine.
//!
//! Only two families of failure are errors:
//!
//! - **Invalid argument**: a caller handed the engine something that no
//!   correct caller would (an endpoint that isn't on the move, a square
//!   index past 8).
//! - **Invariant violation**: the engine caught itself about to corrupt
//!   state (two moves collapsing onto one square, overwriting a classical
//!   mark). These are defects, never game conditions.
//!
//! "You can't do that right now" (game over, cycle pending, occupied
//! square) is not an error. Those are reported as rejections on the
//! engine's outcome types.

use thiserror::Error;

use crate::core::{MoveId, Square};

/// Main error type for the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("endpoint {endpoint} is not on move {move_id}")]
    InvalidEndpoint { endpoint: Square, move_id: MoveId },

    #[error("square index {0} is out of range (expected 0..=8)")]
    SquareOutOfRange(u8),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("move {move_id} is malformed: {reason}")]
    MalformedMove { move_id: MoveId, reason: &'static str },

    #[error("moves {first} and {second} both collapse to square {square}")]
    SquareConflict {
        square: Square,
        first: MoveId,
        second: MoveId,
    },

    #[error("collapse references unknown move {0}")]
    UnknownMove(MoveId),

    #[error("move {0} is already collapsed")]
    AlreadyCollapsed(MoveId),

    #[error("square {square} already holds a classical mark")]
    ClassicalOverwrite { square: Square },
}

impl EngineError {
    /// True for errors that mean the engine's own bookkeeping is broken.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            EngineError::SquareConflict { .. }
                | EngineError::UnknownMove(_)
                | EngineError::AlreadyCollapsed(_)
                | EngineError::ClassicalOverwrite { .. }
        )
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    #[test]
    fn test_invariant_classification() {
        let id = MoveId::new(Player::X, 3);

        assert!(!EngineError::InvalidEndpoint { endpoint: Square::new(4), move_id: id }
            .is_invariant_violation());
        assert!(!EngineError::SquareOutOfRange(9).is_invariant_violation());
        assert!(!EngineError::MalformedMove { move_id: id, reason: "same square twice" }
            .is_invariant_violation());
        assert!(EngineError::UnknownMove(id).is_invariant_violation());
        assert!(EngineError::ClassicalOverwrite { square: Square::new(0) }.is_invariant_violation());
    }

    #[test]
    fn test_display() {
        let err = EngineError::SquareConflict {
            square: Square::new(2),
            first: MoveId::new(Player::X, 1),
            second: MoveId::new(Player::O, 2),
        };
        assert_eq!(err.to_string(), "moves X1 and O2 both collapse to square 2");
    }
}
