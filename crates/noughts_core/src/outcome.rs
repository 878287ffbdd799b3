//! Terminal result of a single game.

use crate::Mark;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// How a game ended, from the human player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum GameResult {
    /// The human completed a line.
    #[display("player win")]
    PlayerWin,
    /// The computer completed a line.
    #[display("computer win")]
    ComputerWin,
    /// Board filled with no line.
    #[display("draw")]
    Draw,
}

impl GameResult {
    /// Result for a win by `mark`, where the human plays [`Mark::X`].
    pub fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::X => GameResult::PlayerWin,
            Mark::O => GameResult::ComputerWin,
        }
    }

    /// Points this result contributes to the player's score.
    pub fn score(self) -> i64 {
        match self {
            GameResult::PlayerWin => 1,
            GameResult::ComputerWin => -1,
            GameResult::Draw => 0,
        }
    }

    /// Message announced to the player.
    pub fn message(self) -> &'static str {
        match self {
            GameResult::PlayerWin => "Congratulations! You won!",
            GameResult::ComputerWin => "Sorry, the computer won. Better luck next time!",
            GameResult::Draw => "The game is a draw! It's a tie.",
        }
    }
}
