//! # quantum-ttt
//!
//! A rules engine for Quantum Tic-Tac-Toe.
//!
//! Each turn a player places a quantum move: one spooky mark in each of two
//! squares. Moves form an entanglement graph over the nine squares. When a
//! move closes a cycle, the other player picks which endpoint that move
//! collapses onto, and the collapse cascades through everything reachable.
//! Lines only count once their marks are classical.
//!
//! ## Design Principles
//!
//! 1. **Values In, Values Out**: Every operation takes `&GameState` and
//!    returns a new state. Old states stay valid, so undo, replay and
//!    lookahead need nothing extra.
//!
//! 2. **Refusals Are Not Errors**: An illegal move or a bad collapse choice
//!    returns the input state with a reason attached. `EngineError` is
//!    reserved for states that break a board invariant.
//!
//! 3. **Deterministic**: Graph searches and collapse propagation visit
//!    squares and moves in a fixed order. The same sequence of calls always
//!    yields the same states.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: The move list is an `im::Vector`, so
//!   cloning a state for a bot's scratch search is O(1).
//!
//! - **Graph Rebuilt Per Query**: The entanglement graph is never stored.
//!   With nine nodes it is cheaper to rebuild than to keep in sync.
//!
//! ## Modules
//!
//! - `core`: Squares, players, moves, the classical board, state, configuration
//! - `error`: `EngineError` for invariant violations
//! - `graph`: Entanglement graph, cycle detection, cycle edges
//! - `collapse`: Collapse propagation and application
//! - `scoring`: Winning lines and the simultaneous-line tie-break
//! - `rules`: Legality, the turn state machine, and the `RulesEngine` trait

pub mod core;
pub mod error;
pub mod graph;
pub mod collapse;
pub mod scoring;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Square, Player, PlayerPair,
    MoveId, QuantumMove, ClassicalMark, ClassicalBoard,
    GameState, PendingCycle, Decision, Winner, Score, PlayerEmoji,
    GameConfig, GameMode, BotDifficulty,
    spooky_marks_in_square,
};

pub use crate::error::{EngineError, Result};

pub use crate::graph::{EntanglementGraph, cycle_edges, would_create_cycle};

pub use crate::collapse::{CollapseMap, AppliedCollapse, collapse_cycle, apply_collapse};

pub use crate::scoring::{CompletedLine, WINNING_LINES, determine_winner, find_winning_lines};

pub use crate::rules::{
    create_game_state, add_quantum_move, resolve_cycle,
    is_legal_move, is_square_available, legal_moves,
    MoveOutcome, MoveRejection, ResolveOutcome, ResolveRejection,
    RulesEngine, QuantumRules, GameAction, GameResult,
};
