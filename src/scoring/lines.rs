//! The eight winning lines and line completion.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::core::{ClassicalBoard, Player, PlayerPair, Square};

/// Three squares in a row, column, or diagonal.
pub type Line = [Square; 3];

const fn line(a: u8, b: u8, c: u8) -> Line {
    [Square::new(a), Square::new(b), Square::new(c)]
}

/// All winning lines: rows, then columns, then diagonals.
pub const WINNING_LINES: [Line; 8] = [
    // Rows
    line(0, 1, 2),
    line(3, 4, 5),
    line(6, 7, 8),
    // Columns
    line(0, 3, 6),
    line(1, 4, 7),
    line(2, 5, 8),
    // Diagonals
    line(0, 4, 8),
    line(2, 4, 6),
];

/// A line held entirely by one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompletedLine {
    pub line: Line,
    pub player: Player,
    /// Latest move index among the line's three marks: when the line was
    /// finished, in move time.
    pub max_move_index: u32,
}

/// The line as completed by a single player, or `None` if any square is
/// empty or the owners differ.
#[must_use]
pub fn completed_line(line: &Line, board: &ClassicalBoard) -> Option<CompletedLine> {
    let [a, b, c] = line.map(|sq| board.get(sq));
    let (a, b, c) = (a?, b?, c?);

    if a.player != b.player || b.player != c.player {
        return None;
    }

    Some(CompletedLine {
        line: *line,
        player: a.player,
        max_move_index: a.move_index.max(b.move_index).max(c.move_index),
    })
}

/// Every completed line, grouped by owner, in [`WINNING_LINES`] order.
#[instrument(level = "trace", skip(board))]
pub fn find_winning_lines(board: &ClassicalBoard) -> PlayerPair<Vec<CompletedLine>> {
    let mut wins: PlayerPair<Vec<CompletedLine>> = PlayerPair::default();

    for done in WINNING_LINES.iter().filter_map(|l| completed_line(l, board)) {
        wins[done.player].push(done);
    }

    wins
}
