//! Winner determination and the simultaneous-line tie-break.

use tracing::{debug, instrument};

use super::lines::{find_winning_lines, CompletedLine};
use crate::core::{ClassicalBoard, Player, Score, Winner};

/// Decide the winner from the classical board.
///
/// - No completed lines: `None`.
/// - One player with lines: that player, full point.
/// - Both players with lines (a single collapse finished both): compare
///   each player's earliest-finished line by its max move index. Lower
///   wins a full point. On an exact tie X takes half a point.
#[instrument(level = "trace", skip(board))]
pub fn determine_winner(board: &ClassicalBoard) -> Option<Winner> {
    let wins = find_winning_lines(board);
    let x = earliest_completion(&wins[Player::X]);
    let o = earliest_completion(&wins[Player::O]);

    let winner = match (x, o) {
        (None, None) => return None,
        (Some(_), None) => Winner { player: Player::X, score: Score::Full },
        (None, Some(_)) => Winner { player: Player::O, score: Score::Full },
        (Some(x), Some(o)) if x < o => Winner { player: Player::X, score: Score::Full },
        (Some(x), Some(o)) if o < x => Winner { player: Player::O, score: Score::Full },
        // Equal completion times: first player keeps the half point
        (Some(_), Some(_)) => Winner { player: Player::X, score: Score::Half },
    };

    debug!(player = %winner.player, score = ?winner.score, "winner determined");
    Some(winner)
}

fn earliest_completion(lines: &[CompletedLine]) -> Option<u32> {
    lines.iter().map(|l| l.max_move_index).min()
}
