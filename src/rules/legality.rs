//! Move legality.
//!
//! Legality depends only on the classical board. A square can carry any
//! number of spooky marks until it turns classical.

use serde::{Deserialize, Serialize};

use crate::core::{ClassicalBoard, Square};

/// Why a placement was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRejection {
    /// The game has already ended.
    GameOver,
    /// A cycle must be resolved before anyone moves again.
    CyclePending,
    /// Both ends of the move are the same square.
    SameSquare,
    /// The square already holds a classical mark.
    SquareClassical(Square),
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRejection::GameOver => write!(f, "game is over"),
            MoveRejection::CyclePending => write!(f, "a cycle is waiting to be resolved"),
            MoveRejection::SameSquare => write!(f, "a move needs two different squares"),
            MoveRejection::SquareClassical(sq) => write!(f, "square {sq} is already classical"),
        }
    }
}

/// Is a square free of classical marks?
#[must_use]
pub fn is_square_available(square: Square, board: &ClassicalBoard) -> bool {
    board.is_available(square)
}

/// Board-level check for a placement on `a` and `b`.
///
/// Returns the first reason the placement is illegal, if any.
#[must_use]
pub fn check_placement(a: Square, b: Square, board: &ClassicalBoard) -> Option<MoveRejection> {
    if a == b {
        return Some(MoveRejection::SameSquare);
    }
    [a, b]
        .into_iter()
        .find(|&sq| !board.is_available(sq))
        .map(MoveRejection::SquareClassical)
}

/// Can a quantum move span `a` and `b`?
#[must_use]
pub fn is_legal_move(a: Square, b: Square, board: &ClassicalBoard) -> bool {
    check_placement(a, b, board).is_none()
}

/// Every legal placement as an `(a, b)` pair with `a < b`, in ascending order.
#[must_use]
pub fn legal_moves(board: &ClassicalBoard) -> Vec<(Square, Square)> {
    Square::all()
        .flat_map(|a| Square::all().filter(move |&b| a < b).map(move |b| (a, b)))
        .filter(|&(a, b)| is_legal_move(a, b, board))
        .collect()
}
