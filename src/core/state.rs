//! Game state: the aggregate value every engine call consumes and produces.
//!
//! ## Immutability
//!
//! Engine operations take `&GameState` and return a new value. A state
//! handed to a caller is never touched again, so keeping an old value
//! around is all "undo" needs.
//!
//! `moves` is an `im::Vector`, which makes those snapshots O(1) to clone
//! for bots doing lookahead.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::ClassicalBoard;
use super::moves::{MoveId, QuantumMove};
use super::player::Player;
use super::square::Square;

/// A cycle awaiting its collapse choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingCycle {
    /// The move that closed the cycle.
    pub cycle_move_id: MoveId,
    /// The player who did *not* close the cycle; picks the seed endpoint.
    pub chooser: Player,
}

/// Points awarded to the winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Score {
    /// A clean win: 1 point.
    Full,
    /// Simultaneous lines completed at the same move index: 1/2 point.
    Half,
}

impl Score {
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Score::Full => 1.0,
            Score::Half => 0.5,
        }
    }
}

/// Outcome once a line is complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Winner {
    pub player: Player,
    pub score: Score,
}

/// Emoji chosen by each player. Opaque to the rules.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerEmoji {
    pub x: String,
    pub o: String,
}

/// What the acting player has to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Place a quantum move on two squares.
    PlaceMove,
    /// Pick which endpoint of the pending cycle's closing move to collapse onto.
    ChooseCollapse,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Every quantum move ever made, collapsed or not, in creation order.
    pub moves: Vector<QuantumMove>,

    /// Classical marks by square.
    pub classical: ClassicalBoard,

    /// Whose turn it is to place the next quantum move.
    pub current_player: Player,

    /// Index assigned to the next move (starts at 1).
    pub move_number: u32,

    /// Set while a cycle waits to be resolved.
    pub pending_cycle: Option<PendingCycle>,

    pub winner: Option<Winner>,

    /// True once there is a winner or every square is classical.
    pub game_over: bool,

    // === Presentation pass-through ===
    pub emojis: Option<PlayerEmoji>,
    pub emoji_selection_complete: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh game: empty board, X to move, move number 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            moves: Vector::new(),
            classical: ClassicalBoard::new(),
            current_player: Player::FIRST,
            move_number: 1,
            pending_cycle: None,
            winner: None,
            game_over: false,
            emojis: None,
            emoji_selection_complete: false,
        }
    }

    /// Moves that are still quantum, in creation order.
    pub fn uncollapsed_moves(&self) -> impl Iterator<Item = &QuantumMove> + '_ {
        self.moves.iter().filter(|m| m.is_uncollapsed())
    }

    /// Look up a move by id.
    #[must_use]
    pub fn find_move(&self, id: MoveId) -> Option<&QuantumMove> {
        self.moves.iter().find(|m| m.id == id)
    }

    /// The move that closed the pending cycle, if there is one.
    #[must_use]
    pub fn pending_move(&self) -> Option<&QuantumMove> {
        self.pending_cycle.and_then(|p| self.find_move(p.cycle_move_id))
    }

    /// No legal placement is left, yet the game is not over.
    ///
    /// Happens when eight squares are classical without a line: the last
    /// open square can never host a move, so no cycle can ever fill it.
    /// `game_over` stays false (it means a winner or a full board); callers
    /// should score this as a tie.
    #[must_use]
    pub fn is_stalled(&self) -> bool {
        if self.game_over || self.pending_cycle.is_some() {
            return false;
        }
        Square::all().filter(|&sq| self.classical.is_available(sq)).count() < 2
    }

    /// Who acts next, and what they must do.
    ///
    /// `None` once the game is over or stalled.
    #[must_use]
    pub fn next_decision(&self) -> Option<(Player, Decision)> {
        if self.game_over || self.is_stalled() {
            return None;
        }
        match self.pending_cycle {
            Some(pending) => Some((pending.chooser, Decision::ChooseCollapse)),
            None => Some((self.current_player, Decision::PlaceMove)),
        }
    }

    /// Uncollapsed moves touching `square`, for rendering spooky marks.
    #[must_use]
    pub fn spooky_marks_in(&self, square: Square) -> Vec<QuantumMove> {
        spooky_marks_in_square(square, &self.moves)
    }

    /// A copy with the presentation emojis set.
    #[must_use]
    pub fn with_emojis(&self, emojis: PlayerEmoji, complete: bool) -> Self {
        Self {
            emojis: Some(emojis),
            emoji_selection_complete: complete,
            ..self.clone()
        }
    }
}

/// All uncollapsed moves touching `square`.
pub fn spooky_marks_in_square<'a>(
    square: Square,
    moves: impl IntoIterator<Item = &'a QuantumMove>,
) -> Vec<QuantumMove> {
    moves
        .into_iter()
        .filter(|m| m.is_uncollapsed() && m.touches(square))
        .copied()
        .collect()
}
