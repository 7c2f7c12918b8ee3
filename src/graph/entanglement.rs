//! The entanglement graph: squares as nodes, uncollapsed moves as edges.
//!
//! Rebuilt from the move list on every query. With nine nodes and at most
//! eight live edges, a fresh adjacency list is cheaper to reason about than
//! an incrementally maintained one.

use smallvec::SmallVec;
use std::collections::VecDeque;

use crate::core::{MoveId, QuantumMove, Square};

/// Edge list of a path, in walk order.
pub type MovePath = SmallVec<[QuantumMove; 8]>;

/// Adjacency view over the uncollapsed moves.
#[derive(Clone, Debug)]
pub struct EntanglementGraph {
    edges: Vec<QuantumMove>,
    /// Edge indices incident to each square, in insertion order.
    adjacency: [SmallVec<[usize; 4]>; Square::COUNT],
}

impl EntanglementGraph {
    /// Build the graph from a move list. Collapsed moves are skipped.
    pub fn from_moves<'a>(moves: impl IntoIterator<Item = &'a QuantumMove>) -> Self {
        let mut graph = Self {
            edges: Vec::new(),
            adjacency: std::array::from_fn(|_| SmallVec::new()),
        };
        for mv in moves.into_iter().filter(|m| m.is_uncollapsed()) {
            let idx = graph.edges.len();
            graph.edges.push(*mv);
            graph.adjacency[mv.a.index()].push(idx);
            graph.adjacency[mv.b.index()].push(idx);
        }
        graph
    }

    /// Build the graph leaving out one move.
    pub fn from_moves_excluding<'a>(
        moves: impl IntoIterator<Item = &'a QuantumMove>,
        excluded: MoveId,
    ) -> Self {
        Self::from_moves(moves.into_iter().filter(move |m| m.id != excluded))
    }

    /// Number of live edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All live edges, in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[QuantumMove] {
        &self.edges
    }

    /// Edges touching `square`, in insertion order.
    pub fn incident(&self, square: Square) -> impl Iterator<Item = &QuantumMove> + '_ {
        self.adjacency[square.index()].iter().map(|&i| &self.edges[i])
    }

    /// Is there a path from `start` to `end`?
    ///
    /// A square is trivially connected to itself.
    #[must_use]
    pub fn is_connected(&self, start: Square, end: Square) -> bool {
        self.path(start, end).is_some()
    }

    /// A shortest path of edges from `start` to `end`, found by BFS.
    ///
    /// `Some(empty)` when `start == end`, `None` when unreachable. Ties are
    /// broken by insertion order, so identical inputs give identical paths.
    #[must_use]
    pub fn path(&self, start: Square, end: Square) -> Option<MovePath> {
        if start == end {
            return Some(MovePath::new());
        }

        // parent[square] = (previous square, edge index used to get here)
        let mut parent: [Option<(Square, usize)>; Square::COUNT] = [None; Square::COUNT];
        let mut visited = [false; Square::COUNT];
        let mut queue = VecDeque::new();

        visited[start.index()] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for &edge_idx in &self.adjacency[current.index()] {
                let Some(next) = self.edges[edge_idx].other_endpoint(current) else {
                    continue;
                };
                if visited[next.index()] {
                    continue;
                }
                visited[next.index()] = true;
                parent[next.index()] = Some((current, edge_idx));

                if next == end {
                    return Some(self.reconstruct(&parent, start, end));
                }
                queue.push_back(next);
            }
        }

        None
    }

    fn reconstruct(
        &self,
        parent: &[Option<(Square, usize)>; Square::COUNT],
        start: Square,
        end: Square,
    ) -> MovePath {
        let mut path = MovePath::new();
        let mut node = end;
        while node != start {
            match parent[node.index()] {
                Some((prev, edge_idx)) => {
                    path.push(self.edges[edge_idx]);
                    node = prev;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    fn mv(player: Player, index: u32, a: u8, b: u8) -> QuantumMove {
        QuantumMove::new(player, index, Square::new(a), Square::new(b))
    }

    #[test]
    fn test_from_moves_skips_collapsed() {
        let moves = [
            mv(Player::X, 1, 0, 1),
            mv(Player::O, 2, 1, 2).collapsed(Square::new(2)),
            mv(Player::X, 3, 3, 4),
        ];
        let graph = EntanglementGraph::from_moves(&moves);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.incident(Square::new(1)).count(), 1);
        assert_eq!(graph.incident(Square::new(2)).count(), 0);
    }

    #[test]
    fn test_path_through_chain() {
        let moves = [mv(Player::X, 1, 0, 1), mv(Player::O, 2, 1, 2), mv(Player::X, 3, 2, 5)];
        let graph = EntanglementGraph::from_moves(&moves);

        let path = graph.path(Square::new(0), Square::new(5)).unwrap();
        let ids: Vec<_> = path.iter().map(|m| m.move_index).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        assert!(graph.path(Square::new(0), Square::new(8)).is_none());
    }

    #[test]
    fn test_path_same_square() {
        let graph = EntanglementGraph::from_moves(std::iter::empty());
        assert_eq!(graph.path(Square::new(3), Square::new(3)), Some(MovePath::new()));
        assert!(graph.is_connected(Square::new(3), Square::new(3)));
    }

    #[test]
    fn test_path_prefers_shortest() {
        // 0-1-2-3 chain plus a direct 0-3 shortcut
        let moves = [
            mv(Player::X, 1, 0, 1),
            mv(Player::O, 2, 1, 2),
            mv(Player::X, 3, 2, 3),
            mv(Player::O, 4, 3, 0),
        ];
        let graph = EntanglementGraph::from_moves(&moves);

        let path = graph.path(Square::new(0), Square::new(3)).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].move_index, 4);
    }

    #[test]
    fn test_excluding() {
        let moves = [mv(Player::X, 1, 0, 1), mv(Player::O, 2, 0, 1)];
        let graph = EntanglementGraph::from_moves_excluding(&moves, MoveId::new(Player::O, 2));

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges()[0].move_index, 1);
    }
}
