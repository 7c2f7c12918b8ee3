//! Cycle detection over the entanglement graph.
//!
//! The uncollapsed graph is always a forest: every cycle is collapsed as
//! soon as it forms. So a new edge between `a` and `b` closes a cycle
//! exactly when `a` and `b` are already connected.

use tracing::{instrument, trace};

use super::entanglement::EntanglementGraph;
use crate::core::{QuantumMove, Square};

/// Would an edge `a`-`b` close a cycle among `uncollapsed` moves?
///
/// Collapsed moves in the input are ignored.
#[instrument(level = "trace", skip(uncollapsed))]
pub fn would_create_cycle<'a>(
    a: Square,
    b: Square,
    uncollapsed: impl IntoIterator<Item = &'a QuantumMove>,
) -> bool {
    EntanglementGraph::from_moves(uncollapsed).is_connected(a, b)
}

/// The edges of the cycle closed by `last_move`.
///
/// Returns the path of existing edges from `last_move.a` to `last_move.b`
/// (in walk order) followed by `last_move` itself. Empty if `last_move`
/// does not actually close a cycle.
#[instrument(level = "trace", skip(last_move, uncollapsed), fields(last_move = %last_move.id))]
pub fn cycle_edges<'a>(
    last_move: &QuantumMove,
    uncollapsed: impl IntoIterator<Item = &'a QuantumMove>,
) -> Vec<QuantumMove> {
    let graph = EntanglementGraph::from_moves_excluding(uncollapsed, last_move.id);

    match graph.path(last_move.a, last_move.b) {
        Some(path) if !path.is_empty() => {
            let mut edges: Vec<QuantumMove> = path.into_iter().collect();
            edges.push(*last_move);
            trace!(len = edges.len(), "cycle found");
            edges
        }
        _ => Vec::new(),
    }
}
