//! Terminal surface: prompts, the human move selector and the game view.

use std::io::{self, BufRead, Write};

use noughts_core::{Board, Cell, GameResult, MoveSelector, Position, SelectError};
use tracing::{debug, instrument, warn};

use crate::session::MenuChoice;

/// Output side of a game: what the turn loop shows the player.
///
/// Methods default to doing nothing so headless players only implement
/// what they need.
pub trait GameView {
    /// Shows the board after a move.
    fn show_board(&mut self, _board: &Board) -> io::Result<()> {
        Ok(())
    }

    /// Announces the cell the computer picked.
    fn show_computer_move(&mut self, _position: Position) -> io::Result<()> {
        Ok(())
    }

    /// Announces how the game ended.
    fn show_result(&mut self, _result: GameResult) -> io::Result<()> {
        Ok(())
    }
}

const INVALID_MOVE: &str = "Error: Invalid Input. Please choose a number from 1 to 9.";
const OCCUPIED_MOVE: &str =
    "Error: The chosen cell is already filled. Please choose an empty cell.";
const INVALID_CHOICE: &str = "Error: Invalid choice. Please enter 1, 2, 3, or q";

/// Line-oriented console over any reader and writer.
///
/// Holds the only handles to input and output, so prompts and game output
/// interleave in order.
#[derive(Debug)]
pub struct Console<I, W> {
    input: I,
    output: W,
}

impl<I: BufRead, W: Write> Console<I, W> {
    /// Creates a console.
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line.
    pub fn say(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Writes `prompt` without a newline and reads one line.
    ///
    /// Returns `None` at end of input. The trailing newline is stripped.
    #[instrument(skip(self))]
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prints the welcome banner and the numbered layout.
    pub fn welcome(&mut self) -> io::Result<()> {
        self.say("Welcome to the \"Unbeatable Noughts and Crosses\" game.")?;
        self.say("The board layout is shown below:")?;
        write!(self.output, "{}", Board::layout())?;
        self.say("When prompted, enter the number corresponding to the square you want.")
    }

    /// Shows the menu until a valid choice is entered.
    ///
    /// Returns `None` at end of input.
    #[instrument(skip(self))]
    pub fn menu_choice(&mut self) -> io::Result<Option<MenuChoice>> {
        loop {
            self.say("Enter one of following options: ")?;
            self.say("        1 - Play the game")?;
            self.say("        2 - Save your score in the leaderboard")?;
            self.say("        3 - Load and display the leaderboard")?;
            self.say("        q - End the program")?;
            let Some(line) = self.prompt("1, 2, 3 or q? ")? else {
                return Ok(None);
            };
            match line.parse::<MenuChoice>() {
                Ok(choice) => return Ok(Some(choice)),
                Err(_) => {
                    warn!(input = %line, "Rejected menu choice");
                    self.say(INVALID_CHOICE)?;
                }
            }
        }
    }

    /// Consumes the console, returning its reader and writer.
    pub fn into_inner(self) -> (I, W) {
        (self.input, self.output)
    }
}

impl<I: BufRead, W: Write> MoveSelector for Console<I, W> {
    /// Prompts until the player types the number of an empty cell.
    #[instrument(skip_all)]
    fn select(&mut self, board: &Board) -> Result<Position, SelectError> {
        loop {
            self.say(format!("{:20}1 2 3", ""))?;
            self.say(format!("{:20}4 5 6", ""))?;
            let Some(line) = self.prompt("Choose your square: 7 8 9 : ")? else {
                return Err(SelectError::InputClosed);
            };
            match line.parse::<Position>() {
                Ok(position) if board.cell(position) == Cell::Empty => {
                    debug!(%position, "Player chose position");
                    return Ok(position);
                }
                Ok(position) => {
                    warn!(%position, "Player chose an occupied cell");
                    self.say(OCCUPIED_MOVE)?;
                }
                Err(e) => {
                    warn!(error = %e, "Rejected move input");
                    self.say(INVALID_MOVE)?;
                }
            }
        }
    }
}

impl<I: BufRead, W: Write> GameView for Console<I, W> {
    fn show_board(&mut self, board: &Board) -> io::Result<()> {
        write!(self.output, "{board}")
    }

    fn show_computer_move(&mut self, position: Position) -> io::Result<()> {
        self.say(format!("The computer has chosen the cell {position}"))
    }

    fn show_result(&mut self, result: GameResult) -> io::Result<()> {
        self.say(result.message())
    }
}
