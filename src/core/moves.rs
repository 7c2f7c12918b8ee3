//! Quantum moves and the classical marks they collapse into.
//!
//! A quantum move ("spooky mark") spans two distinct squares. While it is
//! uncollapsed it is an edge of the entanglement graph. When it collapses it
//! settles on exactly one of its squares, which then holds a
//! [`ClassicalMark`] for the rest of the game.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::square::Square;
use crate::error::EngineError;

/// Stable identifier of a quantum move.
///
/// Derived from the mover and the move's 1-based index, displayed as
/// `X1`, `O2`, `X3`, ...
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MoveId {
    pub player: Player,
    pub move_index: u32,
}

impl MoveId {
    #[must_use]
    pub const fn new(player: Player, move_index: u32) -> Self {
        Self { player, move_index }
    }
}

impl std::fmt::Display for MoveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.player, self.move_index)
    }
}

/// An entangling placement made by one player on one turn.
///
/// `a` and `b` are always distinct. `collapsed_to` is `None` while the
/// move is quantum and is set once, to `a` or `b`, when it collapses.
///
/// Deserializing goes through the same checks: equal endpoints, an `id`
/// that disagrees with `player`/`move_index`, or a collapse square off the
/// move are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawQuantumMove")]
pub struct QuantumMove {
    pub id: MoveId,
    pub player: Player,
    /// Turn number the move was made on. Used for scoring tie-breaks.
    pub move_index: u32,
    pub a: Square,
    pub b: Square,
    pub collapsed_to: Option<Square>,
}

impl QuantumMove {
    /// Create an uncollapsed move.
    ///
    /// Panics if `a == b`; legality checking rejects that before a move is
    /// ever built.
    #[must_use]
    pub fn new(player: Player, move_index: u32, a: Square, b: Square) -> Self {
        assert!(a != b, "A quantum move must span two distinct squares");

        Self {
            id: MoveId::new(player, move_index),
            player,
            move_index,
            a,
            b,
            collapsed_to: None,
        }
    }

    /// Is this move still a quantum (entangled) mark?
    #[must_use]
    pub fn is_uncollapsed(&self) -> bool {
        self.collapsed_to.is_none()
    }

    /// Does this move span `square`?
    #[must_use]
    pub fn touches(&self, square: Square) -> bool {
        self.a == square || self.b == square
    }

    /// The endpoint opposite `square`, or `None` if the move doesn't touch it.
    #[must_use]
    pub fn other_endpoint(&self, square: Square) -> Option<Square> {
        if square == self.a {
            Some(self.b)
        } else if square == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    /// A copy of this move collapsed onto `square`.
    #[must_use]
    pub(crate) fn collapsed(self, square: Square) -> Self {
        Self {
            collapsed_to: Some(square),
            ..self
        }
    }

    /// The classical mark this move leaves behind when it collapses.
    #[must_use]
    pub fn classical_mark(&self) -> ClassicalMark {
        ClassicalMark {
            player: self.player,
            move_index: self.move_index,
        }
    }
}

/// Unchecked wire form of [`QuantumMove`].
#[derive(Deserialize)]
struct RawQuantumMove {
    id: MoveId,
    player: Player,
    move_index: u32,
    a: Square,
    b: Square,
    collapsed_to: Option<Square>,
}

impl TryFrom<RawQuantumMove> for QuantumMove {
    type Error = EngineError;

    fn try_from(raw: RawQuantumMove) -> Result<Self, Self::Error> {
        let malformed = |reason| EngineError::MalformedMove { move_id: raw.id, reason };

        if raw.id != MoveId::new(raw.player, raw.move_index) {
            return Err(malformed("id does not match player and move index"));
        }
        if raw.a == raw.b {
            return Err(malformed("both endpoints are the same square"));
        }
        if let Some(square) = raw.collapsed_to {
            if square != raw.a && square != raw.b {
                return Err(malformed("collapsed onto a square it does not span"));
            }
        }

        Ok(Self {
            id: raw.id,
            player: raw.player,
            move_index: raw.move_index,
            a: raw.a,
            b: raw.b,
            collapsed_to: raw.collapsed_to,
        })
    }
}

impl std::fmt::Display for QuantumMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.collapsed_to {
            Some(square) => write!(f, "{}({}-{} -> {})", self.id, self.a, self.b, square),
            None => write!(f, "{}({}-{})", self.id, self.a, self.b),
        }
    }
}

/// Permanent occupant of a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassicalMark {
    pub player: Player,
    /// Index of the quantum move that collapsed here.
    pub move_index: u32,
}
