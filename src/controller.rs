//! Turn loop: alternates human and computer moves until the game ends.

use derive_more::{Display, Error, From};
use noughts_core::{Board, Cell, GameResult, Mark, MoveSelector, Position, SelectError, rules};
use tracing::{debug, info, instrument};

use crate::console::GameView;

/// Errors that end a game early.
#[derive(Debug, Display, Error, From)]
pub enum GameError {
    /// A selector could not produce a move.
    #[display("move selection failed: {_0}")]
    Select(SelectError),
    /// Writing game output failed.
    #[display("failed to show game output: {_0}")]
    Io(std::io::Error),
    /// A selector returned a cell that is already taken.
    #[display("{mark} selector chose occupied cell {position}")]
    #[from(ignore)]
    OccupiedCell {
        /// The offending cell.
        position: Position,
        /// Mark the selector plays.
        mark: Mark,
    },
}

/// Runs games on a single board owned for the duration of each game.
///
/// The human plays [`Mark::X`] and always moves first; the computer plays
/// [`Mark::O`].
#[derive(Debug)]
pub struct GameController<C> {
    board: Board,
    computer: C,
}

impl<C: MoveSelector> GameController<C> {
    /// Creates a controller with an empty board.
    pub fn new(computer: C) -> Self {
        Self {
            board: Board::new(),
            computer,
        }
    }

    /// Board as left by the last game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays one game to completion.
    ///
    /// After every move the mover's win is checked before the draw, so a
    /// move that both fills the board and completes a line is a win.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if a selector gives up or breaks its contract,
    /// or if output cannot be written.
    #[instrument(skip_all)]
    pub fn play<H>(&mut self, human: &mut H) -> Result<GameResult, GameError>
    where
        H: MoveSelector + GameView,
    {
        self.board.reset();
        info!("Game started");
        human.show_board(&self.board)?;

        let result = loop {
            let position = human.select(&self.board)?;
            self.apply(position, Mark::X)?;
            human.show_board(&self.board)?;
            if let Some(result) = self.terminal_after(Mark::X) {
                break result;
            }

            let position = self.computer.select(&self.board)?;
            self.apply(position, Mark::O)?;
            human.show_board(&self.board)?;
            human.show_computer_move(position)?;
            if let Some(result) = self.terminal_after(Mark::O) {
                break result;
            }
        };

        info!(%result, "Game over");
        human.show_result(result)?;
        Ok(result)
    }

    fn apply(&mut self, position: Position, mark: Mark) -> Result<(), GameError> {
        if self.board.cell(position) != Cell::Empty {
            return Err(GameError::OccupiedCell { position, mark });
        }
        self.board.place(position, mark);
        debug!(%position, %mark, "Move applied");
        Ok(())
    }

    fn terminal_after(&self, mover: Mark) -> Option<GameResult> {
        if rules::has_won(&self.board, mover) {
            Some(GameResult::win_for(mover))
        } else if rules::is_draw(&self.board) {
            Some(GameResult::Draw)
        } else {
            None
        }
    }
}
