//! Menu-driven play session: play games, keep a running score, save it.

use std::io::{BufRead, Write};

use derive_getters::Getters;
use derive_new::new;
use noughts_core::{MoveSelector, SelectError};
use tracing::{error, info, instrument, warn};

use crate::console::Console;
use crate::controller::{GameController, GameError};
use crate::leaderboard::LeaderboardStore;

/// Top-level menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display, strum::EnumIter)]
pub enum MenuChoice {
    /// Play one game.
    #[strum(serialize = "1")]
    Play,
    /// Save the running score under a name.
    #[strum(serialize = "2")]
    SaveScore,
    /// Print the leaderboard.
    #[strum(serialize = "3")]
    ShowLeaderboard,
    /// Leave the program.
    #[strum(serialize = "q")]
    Quit,
}

/// One interactive session over a console.
#[derive(Debug, Getters, new)]
pub struct Session<I, W, C> {
    console: Console<I, W>,
    controller: GameController<C>,
    store: LeaderboardStore,
    /// Sum of game scores since the session started.
    #[new(default)]
    score: i64,
}

impl<I: BufRead, W: Write, C: MoveSelector> Session<I, W, C> {
    /// Runs the menu loop until the player quits or input ends.
    ///
    /// Bad menu input, bad moves and leaderboard failures are reported to
    /// the player and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if console output fails or a move selector
    /// breaks its contract.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), GameError> {
        self.console.welcome()?;
        while let Some(choice) = self.console.menu_choice()? {
            info!(%choice, "Menu choice");
            match choice {
                MenuChoice::Play => match self.controller.play(&mut self.console) {
                    Ok(result) => {
                        self.score += result.score();
                        info!(%result, score = self.score, "Score updated");
                    }
                    Err(GameError::Select(SelectError::InputClosed)) => {
                        info!("Input closed during game");
                        break;
                    }
                    Err(e) => return Err(e),
                },
                MenuChoice::SaveScore => {
                    if !self.save_score()? {
                        break;
                    }
                }
                MenuChoice::ShowLeaderboard => self.show_leaderboard()?,
                MenuChoice::Quit => break,
            }
        }
        info!(score = self.score, "Session ended");
        Ok(())
    }

    /// Asks for a name and records the running score.
    ///
    /// Returns `false` if input ended before a name was given.
    fn save_score(&mut self) -> Result<bool, GameError> {
        let Some(name) = self.console.prompt("Enter your name: ")? else {
            return Ok(false);
        };
        match self.store.record(&name, self.score) {
            Ok(_) => self.console.say("Score saved successfully.")?,
            Err(e) => {
                error!(error = %e, "Failed to save score");
                self.console.say(format!("Error: {e}"))?;
            }
        }
        Ok(true)
    }

    fn show_leaderboard(&mut self) -> Result<(), GameError> {
        match self.store.load() {
            Ok(board) => self.console.say(board.render().trim_end())?,
            Err(e) => {
                warn!(error = %e, "Failed to load leaderboard");
                self.console.say(format!("Error: {e}"))?;
            }
        }
        Ok(())
    }

    /// Consumes the session, returning its console.
    pub fn into_console(self) -> Console<I, W> {
        self.console
    }
}
