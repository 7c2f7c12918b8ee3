//! Game configuration types.
//!
//! A `GameConfig` says who is at the table: two humans, or a human against
//! a bot playing one side. The rules never read it. It exists so the layer
//! driving a bot can ask "is it the bot's turn, and to do what?" without
//! re-deriving the turn logic.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::state::{Decision, GameState};
use crate::error::{EngineError, Result};

/// Who is playing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    TwoPlayer,
    VsBot,
}

/// Strength hint passed through to the bot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BotDifficulty {
    Beginner,
    #[default]
    Medium,
    Advanced,
}

/// Session configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mode: GameMode,

    /// Side the bot plays. Required in `VsBot`, absent in `TwoPlayer`.
    pub bot_player: Option<Player>,

    pub bot_difficulty: Option<BotDifficulty>,
}

impl GameConfig {
    /// Two humans sharing the board.
    #[must_use]
    pub fn two_player() -> Self {
        Self::default()
    }

    /// A human against a bot playing `bot`.
    #[must_use]
    pub fn vs_bot(bot: Player) -> Self {
        Self {
            mode: GameMode::VsBot,
            bot_player: Some(bot),
            bot_difficulty: Some(BotDifficulty::default()),
        }
    }

    /// Set the bot difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: BotDifficulty) -> Self {
        self.bot_difficulty = Some(difficulty);
        self
    }

    /// Check that mode and bot settings agree.
    pub fn validate(&self) -> Result<()> {
        match (self.mode, self.bot_player) {
            (GameMode::VsBot, None) => Err(EngineError::InvalidConfig(
                "vs-bot mode requires a bot player".to_string(),
            )),
            (GameMode::TwoPlayer, Some(p)) => Err(EngineError::InvalidConfig(format!(
                "two-player mode cannot assign player {p} to a bot"
            ))),
            _ => Ok(()),
        }
    }

    /// Is `player` controlled by the bot?
    #[must_use]
    pub fn is_bot(&self, player: Player) -> bool {
        self.mode == GameMode::VsBot && self.bot_player == Some(player)
    }

    /// The decision the bot must make in `state`, if it is the bot's to make.
    ///
    /// Covers both the bot's own turn and the bot choosing the collapse of
    /// a cycle its opponent closed.
    #[must_use]
    pub fn bot_decision(&self, state: &GameState) -> Option<Decision> {
        let (player, decision) = state.next_decision()?;
        self.is_bot(player).then_some(decision)
    }
}
