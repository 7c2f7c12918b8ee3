//! End-to-end game flow tests.
//!
//! Every scenario drives the public API only: `add_quantum_move`,
//! `resolve_cycle`, and the `RulesEngine` wrapper around them.

use quantum_ttt::core::{
    BotDifficulty, Decision, GameConfig, GameState, MoveId, PendingCycle, Player, PlayerEmoji,
    Score, Square,
};
use quantum_ttt::rules::{
    add_quantum_move, create_game_state, resolve_cycle, GameAction, GameResult, MoveRejection,
    QuantumRules, ResolveRejection, RulesEngine,
};

fn sq(i: u8) -> Square {
    Square::new(i)
}

/// One step of a scripted game.
#[derive(Clone, Copy, Debug)]
enum Step {
    Place(u8, u8),
    Resolve(u8),
}

use Step::{Place, Resolve};

fn run(steps: &[Step]) -> GameState {
    steps.iter().fold(create_game_state(), |state, step| match *step {
        Place(a, b) => {
            let outcome = add_quantum_move(&state, sq(a), sq(b));
            assert!(outcome.is_accepted(), "{step:?} refused: {:?}", outcome.rejection);
            outcome.state
        }
        Resolve(endpoint) => {
            let outcome = resolve_cycle(&state, sq(endpoint)).expect("collapse should succeed");
            assert!(outcome.is_accepted(), "{step:?} refused: {:?}", outcome.rejection);
            outcome.state
        }
    })
}

/// Render the classical board as nine chars: `X`, `O`, or `.`.
fn board_string(state: &GameState) -> String {
    Square::all()
        .map(|square| match state.classical[square] {
            Some(mark) => mark.player.to_string(),
            None => ".".to_string(),
        })
        .collect()
}

fn mark_index(state: &GameState, square: u8) -> Option<u32> {
    state.classical[sq(square)].map(|mark| mark.move_index)
}

const X_WINS: [Step; 6] = [
    Place(0, 6),
    Place(1, 6),
    Place(1, 3),
    Place(2, 7),
    Place(0, 6),
    Resolve(0),
];

const O_WINS: [Step; 7] = [
    Place(0, 2),
    Place(0, 4),
    Place(1, 8),
    Place(0, 8),
    Place(3, 7),
    Place(2, 8),
    Resolve(8),
];

const FULL_BOARD_DRAW: [Step; 10] = [
    Place(1, 6),
    Place(1, 7),
    Place(4, 6),
    Place(6, 8),
    Place(0, 4),
    Place(1, 2),
    Place(5, 6),
    Place(0, 3),
    Place(5, 8),
    Resolve(5),
];

// =============================================================================
// Basic Flow
// =============================================================================

#[test]
fn test_opening_sequence() {
    let state = run(&[Place(0, 1), Place(1, 2)]);

    assert_eq!(state.moves.len(), 2);
    assert_eq!(state.current_player, Player::X);
    assert_eq!(state.move_number, 3);
    assert!(state.pending_cycle.is_none());
    assert_eq!(state.classical.filled_count(), 0);
    assert_eq!(state.spooky_marks_in(sq(1)).len(), 2);
    assert_eq!(state.next_decision(), Some((Player::X, Decision::PlaceMove)));
}

#[test]
fn test_triangle_cycle_and_collapse() {
    let pending = run(&[Place(0, 1), Place(1, 2), Place(2, 0)]);

    assert_eq!(
        pending.pending_cycle,
        Some(PendingCycle {
            cycle_move_id: MoveId::new(Player::X, 3),
            chooser: Player::O,
        })
    );
    assert_eq!(pending.next_decision(), Some((Player::O, Decision::ChooseCollapse)));

    let outcome = resolve_cycle(&pending, sq(0)).unwrap();
    let state = outcome.state;

    // X3 -> 0, X1 -> 1, O2 -> 2
    assert_eq!(board_string(&state), "XXO......");
    assert_eq!(mark_index(&state, 0), Some(3));
    assert_eq!(mark_index(&state, 1), Some(1));
    assert_eq!(mark_index(&state, 2), Some(2));
    assert_eq!(outcome.collapse.len(), 3);
    assert_eq!(outcome.collapse.get(MoveId::new(Player::X, 3)), Some(sq(0)));

    assert!(state.pending_cycle.is_none());
    assert!(state.winner.is_none());
    assert!(!state.game_over);
    // Turn order is untouched by the collapse
    assert_eq!(state.current_player, Player::O);
    assert_eq!(state.move_number, 4);
}

#[test]
fn test_collapse_leaves_other_components_alone() {
    let pending = run(&[Place(0, 1), Place(4, 5), Place(0, 1)]);
    let state = resolve_cycle(&pending, sq(1)).unwrap().state;

    // X3 -> 1 forces X1 -> 0
    assert_eq!(board_string(&state), "XX.......");
    assert_eq!(state.uncollapsed_moves().count(), 1);
    assert_eq!(state.spooky_marks_in(sq(4)), state.spooky_marks_in(sq(5)));
    assert_eq!(state.spooky_marks_in(sq(4))[0].id, MoveId::new(Player::O, 2));
}

// =============================================================================
// Refusals
// =============================================================================

#[test]
fn test_refusals_leave_state_unchanged() {
    let state = run(&[Place(0, 1), Place(1, 0), Resolve(0)]);
    assert_eq!(board_string(&state), "OX.......");

    let onto_classical = add_quantum_move(&state, sq(0), sq(5));
    assert_eq!(onto_classical.rejection, Some(MoveRejection::SquareClassical(sq(0))));
    assert_eq!(onto_classical.state, state);

    let same_square = add_quantum_move(&state, sq(5), sq(5));
    assert_eq!(same_square.rejection, Some(MoveRejection::SameSquare));
    assert_eq!(same_square.state, state);

    let nothing_pending = resolve_cycle(&state, sq(3)).unwrap();
    assert_eq!(nothing_pending.rejection, Some(ResolveRejection::NoPendingCycle));
    assert_eq!(nothing_pending.state, state);
}

#[test]
fn test_game_over_refuses_moves() {
    let state = run(&X_WINS);

    let outcome = add_quantum_move(&state, sq(4), sq(5));
    assert_eq!(outcome.rejection, Some(MoveRejection::GameOver));
    assert_eq!(outcome.state, state);
    assert!(state.next_decision().is_none());
}

// =============================================================================
// Endings
// =============================================================================

#[test]
fn test_x_wins_column() {
    let state = run(&X_WINS);

    assert_eq!(board_string(&state), "XO.X..X..");
    let winner = state.winner.expect("X should have won");
    assert_eq!(winner.player, Player::X);
    assert_eq!(winner.score, Score::Full);
    assert!(state.game_over);
    // O4 on 2-7 was never part of the cycle
    assert_eq!(state.uncollapsed_moves().count(), 1);
}

#[test]
fn test_o_wins_diagonal() {
    let state = run(&O_WINS);

    assert_eq!(board_string(&state), "OXX.O...O");
    assert_eq!(state.winner.map(|w| w.player), Some(Player::O));
    assert_eq!(state.winner.map(|w| w.score), Some(Score::Full));
    assert!(state.game_over);
}

#[test]
fn test_simultaneous_lines_earliest_wins() {
    let state = run(&[
        Place(1, 7),
        Place(6, 7),
        Place(0, 4),
        Place(0, 3),
        Place(4, 7),
        Place(3, 6),
        Resolve(3),
    ]);

    // X owns column 1-4-7 (last mark X5), O owns column 0-3-6 (last mark O6)
    assert_eq!(board_string(&state), "OX.OX.OX.");
    assert_eq!(mark_index(&state, 7), Some(5));
    assert_eq!(mark_index(&state, 3), Some(6));

    let winner = state.winner.expect("someone should have won");
    assert_eq!(winner.player, Player::X);
    assert_eq!(winner.score, Score::Full);
}

#[test]
fn test_full_board_draw() {
    let state = run(&FULL_BOARD_DRAW);

    assert_eq!(board_string(&state), "XXOOXXXOO");
    assert!(state.classical.is_full());
    assert!(state.winner.is_none());
    assert!(state.game_over);
    assert_eq!(state.uncollapsed_moves().count(), 0);
}

#[test]
fn test_single_open_square_stalls() {
    let state = run(&[
        Place(2, 5),
        Place(0, 8),
        Place(5, 8),
        Place(5, 6),
        Place(1, 5),
        Place(4, 8),
        Place(2, 7),
        Place(0, 5),
        Resolve(5),
    ]);

    assert_eq!(board_string(&state), "OXX.OOOXX");
    assert_eq!(state.classical.filled_count(), 8);
    assert!(state.winner.is_none());
    // Only a winner or a full board ends the game
    assert!(!state.game_over);
    assert!(state.is_stalled());
    assert!(state.next_decision().is_none());

    let outcome = add_quantum_move(&state, sq(3), sq(4));
    assert_eq!(outcome.rejection, Some(MoveRejection::SquareClassical(sq(4))));

    let rules = QuantumRules::default();
    assert_eq!(rules.is_terminal(&state), Some(GameResult::Draw));
    assert!(rules.legal_actions(&state).is_empty());
}

// =============================================================================
// Snapshots and Replay
// =============================================================================

#[test]
fn test_snapshots_are_immutable() {
    let before = run(&[Place(0, 1), Place(1, 2), Place(2, 0)]);
    let copy = before.clone();

    let after = resolve_cycle(&before, sq(2)).unwrap().state;

    assert_eq!(before, copy);
    assert!(before.moves.iter().all(|m| m.is_uncollapsed()));
    assert!(after.moves.iter().all(|m| !m.is_uncollapsed()));
}

#[test]
fn test_replay_is_deterministic() {
    assert_eq!(run(&FULL_BOARD_DRAW), run(&FULL_BOARD_DRAW));
    assert_eq!(run(&O_WINS), run(&O_WINS));
}

#[test]
fn test_state_survives_json() {
    let state = run(&FULL_BOARD_DRAW[..9]).with_emojis(
        PlayerEmoji {
            x: "🐱".to_string(),
            o: "🐶".to_string(),
        },
        true,
    );

    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, state);
    let finished = resolve_cycle(&restored, sq(5)).unwrap().state;
    assert_eq!(board_string(&finished), "XXOOXXXOO");
    assert!(finished.emoji_selection_complete);
}

// =============================================================================
// RulesEngine and Bot Configuration
// =============================================================================

#[test]
fn test_engine_plays_scripted_game() {
    let rules = QuantumRules::default();
    let mut state = GameState::new();

    for step in X_WINS {
        let action = match step {
            Place(a, b) => GameAction::Place { a: sq(a), b: sq(b) },
            Resolve(endpoint) => GameAction::Collapse { endpoint: sq(endpoint) },
        };
        assert!(rules.is_legal_action(&state, &action), "{action:?} should be legal");
        state = rules.apply_action(&state, &action).unwrap();
    }

    let result = rules.is_terminal(&state).expect("game should be over");
    assert!(result.is_winner(Player::X));
    assert_eq!(state, run(&X_WINS));
}

#[test]
fn test_bot_chooses_collapse_of_human_cycle() {
    let config = GameConfig::vs_bot(Player::O).with_difficulty(BotDifficulty::Advanced);
    assert!(config.validate().is_ok());

    let state = create_game_state();
    assert_eq!(config.bot_decision(&state), None);

    let state = run(&[Place(0, 1)]);
    assert_eq!(config.bot_decision(&state), Some(Decision::PlaceMove));

    // X closes a cycle on its turn; O (the bot) must pick the collapse
    let state = run(&[Place(0, 1), Place(1, 2), Place(2, 0)]);
    assert_eq!(state.current_player, Player::O);
    assert_eq!(config.bot_decision(&state), Some(Decision::ChooseCollapse));

    // O closes a cycle; X (the human) chooses, so the bot waits
    let state = run(&[Place(0, 1), Place(0, 1)]);
    assert_eq!(state.pending_cycle.map(|p| p.chooser), Some(Player::X));
    assert_eq!(config.bot_decision(&state), None);
}
