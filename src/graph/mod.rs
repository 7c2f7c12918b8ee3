//! Entanglement graph and cycle detection.
//!
//! Nodes are the nine squares; edges are the uncollapsed quantum moves.
//! Only the component containing the newest move ever needs inspecting,
//! and BFS keeps the answers deterministic for a given move order.

pub mod entanglement;
pub mod cycle;

pub use entanglement::{EntanglementGraph, MovePath};
pub use cycle::{cycle_edges, would_create_cycle};
