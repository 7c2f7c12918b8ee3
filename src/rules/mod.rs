//! Game rules: legality, the turn state machine, and the `RulesEngine`
//! trait that lookahead callers drive.
//!
//! - `legality`: which placements the classical board allows
//! - `turn`: `add_quantum_move` and `resolve_cycle`, the only two ways a
//!   game moves forward
//! - `engine`: `RulesEngine` / `QuantumRules` over `GameAction`s

pub mod legality;
pub mod turn;
pub mod engine;

pub use legality::{check_placement, is_legal_move, is_square_available, legal_moves, MoveRejection};
pub use turn::{
    add_quantum_move, create_game_state, resolve_cycle, MoveOutcome, ResolveOutcome,
    ResolveRejection,
};
pub use engine::{GameAction, GameResult, QuantumRules, RulesEngine};
