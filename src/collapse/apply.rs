//! Turning a collapse map into updated moves and new classical marks.

use im::Vector;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{error, instrument};

use super::map::CollapseMap;
use crate::core::{ClassicalMark, MoveId, QuantumMove, Square};
use crate::error::{EngineError, Result};

/// Marks produced by one collapse, in collapse-map order.
pub type NewMarks = SmallVec<[(Square, ClassicalMark); 9]>;

/// Output of [`apply_collapse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedCollapse {
    /// The full move list with collapsed moves updated; others untouched.
    pub updated_moves: Vector<QuantumMove>,
    /// One classical mark per collapsed move, at the square it settled on.
    pub new_marks: NewMarks,
}

/// Apply `map` to `moves` without touching either input.
///
/// Fails if the map names a move that doesn't exist, one that already
/// collapsed, a square off the move, or the same square twice.
#[instrument(level = "debug", skip_all, fields(collapsing = map.len()))]
pub fn apply_collapse(moves: &Vector<QuantumMove>, map: &CollapseMap) -> Result<AppliedCollapse> {
    let index_by_id: FxHashMap<MoveId, usize> =
        moves.iter().enumerate().map(|(i, m)| (m.id, i)).collect();

    let mut updated_moves = moves.clone();
    let mut new_marks = NewMarks::new();

    for (id, square) in map.iter() {
        let Some(&idx) = index_by_id.get(&id) else {
            error!(move_id = %id, "collapse map names an unknown move");
            return Err(EngineError::UnknownMove(id));
        };
        let original = moves[idx];

        if !original.is_uncollapsed() {
            error!(move_id = %id, "collapse map names a collapsed move");
            return Err(EngineError::AlreadyCollapsed(id));
        }
        if !original.touches(square) {
            return Err(EngineError::InvalidEndpoint { endpoint: square, move_id: id });
        }
        if let Some(&(_, existing)) = new_marks.iter().find(|(sq, _)| *sq == square) {
            let first = MoveId::new(existing.player, existing.move_index);
            error!(%square, %first, second = %id, "collapse map reuses a square");
            return Err(EngineError::SquareConflict { square, first, second: id });
        }

        updated_moves.set(idx, original.collapsed(square));
        new_marks.push((square, original.classical_mark()));
    }

    Ok(AppliedCollapse { updated_moves, new_marks })
}
