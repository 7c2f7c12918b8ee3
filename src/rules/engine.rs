//! Rules engine trait for lookahead callers.
//!
//! Bots and tip generators explore the game by asking for legal actions,
//! applying them to scratch states, and checking for a result. They go
//! through `RulesEngine` so they never re-implement turn logic.
//!
//! ## Implementation Notes
//!
//! - `legal_placements` / `legal_collapses`: return empty when the player
//!   to act can't do that kind of action right now
//! - `apply_action`: must be deterministic; a refused action returns the
//!   input state unchanged
//! - `is_terminal`: return `None` while the game continues; a stalled
//!   game (no placement possible, nothing pending) is a `Draw`

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::legality::legal_moves;
use super::turn::{add_quantum_move, resolve_cycle};
use crate::core::{GameConfig, GameState, Player, Square, Winner};
use crate::error::Result;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A player completed a line.
    Winner(Winner),
    /// Board full, or stalled on one open square, with no line.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        match self {
            GameResult::Winner(w) => w.player == player,
            GameResult::Draw => false,
        }
    }
}

/// One step a player can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Place a quantum move spanning `a` and `b`.
    Place { a: Square, b: Square },
    /// Collapse the pending cycle's closing move onto `endpoint`.
    Collapse { endpoint: Square },
}

/// Rules engine trait.
pub trait RulesEngine {
    /// Get the session configuration.
    fn config(&self) -> &GameConfig;

    /// Placements available to the player to move.
    fn legal_placements(&self, state: &GameState) -> Vec<(Square, Square)>;

    /// Collapse endpoints available to the chooser.
    fn legal_collapses(&self, state: &GameState) -> Vec<Square>;

    /// Apply an action, producing the next state.
    fn apply_action(&self, state: &GameState, action: &GameAction) -> Result<GameState>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Enumerate all legal actions for whoever acts next.
    fn legal_actions(&self, state: &GameState) -> Vec<GameAction> {
        let collapses = self
            .legal_collapses(state)
            .into_iter()
            .map(|endpoint| GameAction::Collapse { endpoint });
        let placements = self
            .legal_placements(state)
            .into_iter()
            .map(|(a, b)| GameAction::Place { a, b });

        collapses.chain(placements).collect()
    }

    /// Is `action` currently legal?
    fn is_legal_action(&self, state: &GameState, action: &GameAction) -> bool {
        match *action {
            GameAction::Collapse { endpoint } => self.legal_collapses(state).contains(&endpoint),
            GameAction::Place { a, b } => {
                let (lo, hi) = if a < b { (a, b) } else { (b, a) };
                self.legal_placements(state).contains(&(lo, hi))
            }
        }
    }
}

/// The Quantum Tic-Tac-Toe rules.
#[derive(Clone, Debug, Default)]
pub struct QuantumRules {
    config: GameConfig,
}

impl QuantumRules {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl RulesEngine for QuantumRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_placements(&self, state: &GameState) -> Vec<(Square, Square)> {
        if state.game_over || state.pending_cycle.is_some() {
            return Vec::new();
        }
        legal_moves(&state.classical)
    }

    fn legal_collapses(&self, state: &GameState) -> Vec<Square> {
        if state.game_over {
            return Vec::new();
        }
        match state.pending_move() {
            Some(mv) => vec![mv.a, mv.b],
            None => Vec::new(),
        }
    }

    #[instrument(level = "trace", skip(self, state))]
    fn apply_action(&self, state: &GameState, action: &GameAction) -> Result<GameState> {
        match *action {
            GameAction::Place { a, b } => Ok(add_quantum_move(state, a, b).state),
            GameAction::Collapse { endpoint } => Ok(resolve_cycle(state, endpoint)?.state),
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if state.is_stalled() {
            return Some(GameResult::Draw);
        }
        if !state.game_over {
            return None;
        }
        Some(match state.winner {
            Some(winner) => GameResult::Winner(winner),
            None => GameResult::Draw,
        })
    }
}
