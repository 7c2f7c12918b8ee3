//! The two state transitions: placing a quantum move and resolving a cycle.
//!
//! ## Flow
//!
//! ```text
//! add_quantum_move ──► legal? ──► closes cycle? ──yes──► pending_cycle set
//!                                      │                      │
//!                                      no                resolve_cycle
//!                                      ▼                      ▼
//!                               winner check        collapse + apply + winner check
//! ```
//!
//! Both functions take the current state by reference and return a new
//! one. A refused call returns a copy of the input along with the reason;
//! it is never an error. Errors are reserved for broken invariants.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use super::legality::{check_placement, MoveRejection};
use crate::collapse::{apply_collapse, collapse_cycle, CollapseMap};
use crate::core::{GameState, MoveId, PendingCycle, QuantumMove, Square};
use crate::error::Result;
use crate::graph::would_create_cycle;
use crate::scoring::determine_winner;

/// A fresh game: empty board, X to move, move number 1.
#[must_use]
pub fn create_game_state() -> GameState {
    GameState::new()
}

/// Result of [`add_quantum_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub state: GameState,
    /// The new move closed a cycle; the state now has a pending cycle.
    pub cycle_created: bool,
    /// Set when the move was refused and `state` is the unchanged input.
    pub rejection: Option<MoveRejection>,
}

impl MoveOutcome {
    fn rejected(state: &GameState, reason: MoveRejection) -> Self {
        debug!(%reason, "move rejected");
        Self {
            state: state.clone(),
            cycle_created: false,
            rejection: Some(reason),
        }
    }

    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Why a cycle resolution was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolveRejection {
    /// There is no cycle waiting.
    NoPendingCycle,
    /// The pending cycle names a move that isn't in the state.
    MoveNotFound(MoveId),
    /// The endpoint isn't one of the closing move's squares.
    EndpointNotOnMove { endpoint: Square, move_id: MoveId },
}

impl std::fmt::Display for ResolveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveRejection::NoPendingCycle => write!(f, "no cycle is pending"),
            ResolveRejection::MoveNotFound(id) => write!(f, "pending move {id} not found"),
            ResolveRejection::EndpointNotOnMove { endpoint, move_id } => {
                write!(f, "square {endpoint} is not an endpoint of {move_id}")
            }
        }
    }
}

/// Result of [`resolve_cycle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolveOutcome {
    pub state: GameState,
    /// What collapsed where, in propagation order. Empty when rejected.
    pub collapse: CollapseMap,
    /// Set when the resolution was refused and `state` is the unchanged input.
    pub rejection: Option<ResolveRejection>,
}

impl ResolveOutcome {
    fn rejected(state: &GameState, reason: ResolveRejection) -> Self {
        debug!(%reason, "cycle resolution rejected");
        Self {
            state: state.clone(),
            collapse: CollapseMap::new(),
            rejection: Some(reason),
        }
    }

    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Place a quantum move for the current player on squares `a` and `b`.
///
/// Refused while the game is over, while a cycle is pending, or when the
/// squares are equal or classical. Otherwise the move is appended and the
/// turn passes. If the move closes a cycle the opponent of the mover
/// becomes the chooser and scoring waits for [`resolve_cycle`].
#[instrument(
    level = "debug",
    skip(state),
    fields(player = %state.current_player, move_number = state.move_number)
)]
pub fn add_quantum_move(state: &GameState, a: Square, b: Square) -> MoveOutcome {
    if state.game_over {
        return MoveOutcome::rejected(state, MoveRejection::GameOver);
    }
    if state.pending_cycle.is_some() {
        return MoveOutcome::rejected(state, MoveRejection::CyclePending);
    }
    if let Some(reason) = check_placement(a, b, &state.classical) {
        return MoveOutcome::rejected(state, reason);
    }

    let mover = state.current_player;
    let new_move = QuantumMove::new(mover, state.move_number, a, b);
    let cycle_created = would_create_cycle(a, b, state.uncollapsed_moves());

    let mut next = state.clone();
    next.moves.push_back(new_move);
    next.current_player = mover.opponent();
    next.move_number += 1;

    if cycle_created {
        debug!(move_id = %new_move.id, chooser = %mover.opponent(), "cycle closed");
        next.pending_cycle = Some(PendingCycle {
            cycle_move_id: new_move.id,
            chooser: mover.opponent(),
        });
    } else if let Some(winner) = determine_winner(&next.classical) {
        next.winner = Some(winner);
        next.game_over = true;
    }

    MoveOutcome {
        state: next,
        cycle_created,
        rejection: None,
    }
}

/// Resolve the pending cycle by collapsing its closing move onto `endpoint`.
///
/// Refused when nothing is pending, when the pending move is missing, or
/// when `endpoint` isn't on it. On success every move reached by the
/// collapse turns classical, the pending cycle clears, and the game ends
/// if someone won or all nine squares are classical. Eight classical
/// squares without a line leave the game stalled rather than over; see
/// [`GameState::is_stalled`].
///
/// Returns `Err` only if the collapse would break a board invariant.
#[instrument(level = "debug", skip(state), fields(pending = ?state.pending_cycle))]
pub fn resolve_cycle(state: &GameState, endpoint: Square) -> Result<ResolveOutcome> {
    let Some(pending) = state.pending_cycle else {
        return Ok(ResolveOutcome::rejected(state, ResolveRejection::NoPendingCycle));
    };
    let Some(last_move) = state.find_move(pending.cycle_move_id).copied() else {
        return Ok(ResolveOutcome::rejected(
            state,
            ResolveRejection::MoveNotFound(pending.cycle_move_id),
        ));
    };
    if !last_move.touches(endpoint) {
        return Ok(ResolveOutcome::rejected(
            state,
            ResolveRejection::EndpointNotOnMove {
                endpoint,
                move_id: last_move.id,
            },
        ));
    }

    let collapse = collapse_cycle(&last_move, endpoint, state.uncollapsed_moves())?;
    let applied = apply_collapse(&state.moves, &collapse)?;

    let mut classical = state.classical;
    for &(square, mark) in &applied.new_marks {
        if let Err(err) = classical.place(square, mark) {
            error!(%square, "collapse targeted a classical square");
            return Err(err);
        }
    }

    let winner = determine_winner(&classical);
    let game_over = winner.is_some() || classical.is_full();
    debug!(
        collapsed = collapse.len(),
        winner = ?winner,
        game_over,
        "cycle resolved"
    );

    let next = GameState {
        moves: applied.updated_moves,
        classical,
        pending_cycle: None,
        winner,
        game_over,
        ..state.clone()
    };

    Ok(ResolveOutcome {
        state: next,
        collapse,
        rejection: None,
    })
}
