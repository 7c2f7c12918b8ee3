//! Square identification on the fixed 3×3 grid.
//!
//! ## Layout
//!
//! Squares are numbered row-major:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! ## Usage
//!
//! ```
//! use quantum_ttt::core::Square;
//!
//! let center = Square::new(4);
//! assert_eq!(center.row(), 1);
//! assert_eq!(center.col(), 1);
//!
//! assert!(Square::try_from(9).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// One of the nine cells of the board.
///
/// Always holds a value in `0..=8`. Construct with [`Square::new`] for
/// trusted constants, or `Square::try_from(u8)` for untrusted input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = 9;

    /// Create a square from its index.
    ///
    /// Panics if `index > 8`.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < Self::COUNT as u8, "Square index must be 0..=8");
        Self(index)
    }

    /// Raw index (0-8), usable for array indexing.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row on the grid (0-2).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 3
    }

    /// Column on the grid (0-2).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 3
    }

    /// Iterate over all nine squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }
}

impl TryFrom<u8> for Square {
    type Error = EngineError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if (index as usize) < Self::COUNT {
            Ok(Self(index))
        } else {
            Err(EngineError::SquareOutOfRange(index))
        }
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> Self {
        square.0
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
