//! The result of a collapse: which move settles on which square.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{MoveId, Square};

/// Ordered mapping from move to the square it collapses onto.
///
/// Entries keep the order in which the propagation assigned them; the
/// first entry is always the cycle-closing move. A board has nine squares,
/// so nine entries never spill to the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollapseMap {
    entries: SmallVec<[(MoveId, Square); 9]>,
}

impl CollapseMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `id` collapses onto `square`.
    ///
    /// Returns false (and changes nothing) if `id` is already assigned.
    pub fn insert(&mut self, id: MoveId, square: Square) -> bool {
        if self.contains(id) {
            return false;
        }
        self.entries.push((id, square));
        true
    }

    /// Square assigned to `id`.
    #[must_use]
    pub fn get(&self, id: MoveId) -> Option<Square> {
        self.entries.iter().find(|(m, _)| *m == id).map(|&(_, sq)| sq)
    }

    #[must_use]
    pub fn contains(&self, id: MoveId) -> bool {
        self.entries.iter().any(|(m, _)| *m == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (move, square) in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (MoveId, Square)> + '_ {
        self.entries.iter().copied()
    }
}

impl FromIterator<(MoveId, Square)> for CollapseMap {
    fn from_iter<I: IntoIterator<Item = (MoveId, Square)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (id, square) in iter {
            map.insert(id, square);
        }
        map
    }
}
