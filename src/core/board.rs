//! The classical board: nine slots, each empty or holding a permanent mark.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::moves::ClassicalMark;
use super::square::Square;
use crate::error::{EngineError, Result};

/// Fixed-size board of classical marks.
///
/// A slot is written at most once. [`ClassicalBoard::place`] refuses to
/// overwrite, so every write path goes through the same check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassicalBoard {
    slots: [Option<ClassicalMark>; Square::COUNT],
}

impl ClassicalBoard {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The mark on a square, if any.
    #[must_use]
    pub fn get(&self, square: Square) -> Option<ClassicalMark> {
        self.slots[square.index()]
    }

    /// Is the square still free of classical marks?
    #[must_use]
    pub fn is_available(&self, square: Square) -> bool {
        self.slots[square.index()].is_none()
    }

    /// Place a mark on an empty square.
    pub fn place(&mut self, square: Square, mark: ClassicalMark) -> Result<()> {
        let slot = &mut self.slots[square.index()];
        if slot.is_some() {
            return Err(EngineError::ClassicalOverwrite { square });
        }
        *slot = Some(mark);
        Ok(())
    }

    /// Number of squares holding a mark.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// True once every square is classical.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Iterate over (Square, mark) in square order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Option<ClassicalMark>)> + '_ {
        Square::all().zip(self.slots.iter().copied())
    }
}

impl Index<Square> for ClassicalBoard {
    type Output = Option<ClassicalMark>;

    fn index(&self, square: Square) -> &Self::Output {
        &self.slots[square.index()]
    }
}
