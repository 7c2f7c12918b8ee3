//! Core types: squares, players, moves, the classical board, game state,
//! and session configuration.
//!
//! Everything here is plain data. The rules that act on it live in
//! `graph`, `collapse`, `scoring`, and `rules`.

pub mod square;
pub mod player;
pub mod moves;
pub mod board;
pub mod state;
pub mod config;

pub use square::Square;
pub use player::{Player, PlayerPair};
pub use moves::{ClassicalMark, MoveId, QuantumMove};
pub use board::ClassicalBoard;
pub use state::{
    spooky_marks_in_square, Decision, GameState, PendingCycle, PlayerEmoji, Score, Winner,
};
pub use config::{BotDifficulty, GameConfig, GameMode};
