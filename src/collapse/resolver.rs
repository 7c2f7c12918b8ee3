//! Collapse propagation.
//!
//! Fixing one endpoint of the cycle-closing move makes that square
//! classical. Every other uncollapsed move touching a classical square is
//! then forced onto its other endpoint, which becomes classical in turn.
//! This repeats until nothing new is forced.
//!
//! Because the uncollapsed graph minus the closing move is a forest, each
//! square is reached at most once. A second move landing on a square
//! already claimed means the graph was malformed, and is reported as
//! [`EngineError::SquareConflict`] instead of being overwritten.

use tracing::{debug, error, instrument, trace};

use super::map::CollapseMap;
use crate::core::{MoveId, QuantumMove, Square};
use crate::error::{EngineError, Result};
use crate::graph::EntanglementGraph;

/// Collapse the component reached from `last_move` settling on `chosen`.
///
/// `chosen` must be `last_move.a` or `last_move.b`. Moves in components not
/// reached by the propagation are left out of the map.
#[instrument(level = "debug", skip(last_move, uncollapsed), fields(last_move = %last_move.id))]
pub fn collapse_cycle<'a>(
    last_move: &QuantumMove,
    chosen: Square,
    uncollapsed: impl IntoIterator<Item = &'a QuantumMove>,
) -> Result<CollapseMap> {
    if !last_move.touches(chosen) {
        return Err(EngineError::InvalidEndpoint {
            endpoint: chosen,
            move_id: last_move.id,
        });
    }

    let graph = EntanglementGraph::from_moves(uncollapsed);
    let mut map = CollapseMap::new();
    // Which move claimed each square during this collapse.
    let mut claimed: [Option<MoveId>; Square::COUNT] = [None; Square::COUNT];

    map.insert(last_move.id, chosen);
    claimed[chosen.index()] = Some(last_move.id);

    let mut changed = true;
    while changed {
        changed = false;

        for square in Square::all() {
            if claimed[square.index()].is_none() {
                continue;
            }

            for mv in graph.incident(square) {
                if map.contains(mv.id) {
                    continue;
                }
                let Some(target) = mv.other_endpoint(square) else {
                    continue;
                };

                if let Some(first) = claimed[target.index()] {
                    error!(%target, %first, second = %mv.id, "collapse assigned a square twice");
                    return Err(EngineError::SquareConflict {
                        square: target,
                        first,
                        second: mv.id,
                    });
                }

                trace!(move_id = %mv.id, %target, "forced collapse");
                map.insert(mv.id, target);
                claimed[target.index()] = Some(mv.id);
                changed = true;
            }
        }
    }

    debug!(collapsed = map.len(), "collapse complete");
    Ok(map)
}
