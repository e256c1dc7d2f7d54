//! The interactive command menu.
//!
//! Input is read as whitespace-separated tokens, so `1 3 4` on one line is
//! the same as three separate answers. End of input behaves like `q`.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use conway_core::Board;
use tracing::{debug, info, warn};

use crate::error::CliError;
use crate::render;

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Prompt for coordinates and set that cell live.
    AddCell,
    /// Start the run loop.
    Run,
    /// Exit the program.
    Quit,
}

/// A token that is not a menu selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown menu option: {0}")]
pub struct UnknownCommand(String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "1" => Ok(Self::AddCell),
            "2" => Ok(Self::Run),
            "q" => Ok(Self::Quit),
            other => Err(UnknownCommand(other.to_owned())),
        }
    }
}

/// What the caller should do after a menu step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Show the menu again.
    Continue,
    /// Leave the menu and start the run loop.
    Run,
    /// Exit the program.
    Quit,
}

/// A menu session over an input and an output stream.
pub struct Menu<R, W> {
    input: R,
    output: W,
    /// Tokens read from the current line and not yet consumed.
    tokens: VecDeque<String>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a session reading from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            tokens: VecDeque::new(),
        }
    }

    /// Print the greeting shown once at startup.
    pub fn welcome(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "Welcome to Conway's Game of Life!")?;
        Ok(())
    }

    /// Show the menu, read one selection, and carry it out.
    pub fn step(&mut self, board: &mut Board) -> Result<MenuOutcome, CliError> {
        self.print_menu()?;
        let Some(token) = self.next_token()? else {
            info!("Input closed, quitting");
            return Ok(MenuOutcome::Quit);
        };

        match token.parse::<Command>() {
            Ok(Command::AddCell) => {
                self.add_cell(board)?;
                Ok(MenuOutcome::Continue)
            }
            Ok(Command::Run) => Ok(MenuOutcome::Run),
            Ok(Command::Quit) => Ok(MenuOutcome::Quit),
            Err(err) => {
                debug!(error = %err, "Rejected menu input");
                writeln!(self.output, "Please select one of the menu options!")?;
                Ok(MenuOutcome::Continue)
            }
        }
    }

    /// Give back the output stream.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn print_menu(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "Select from the menu:")?;
        writeln!(self.output, "[1] Input cells")?;
        writeln!(self.output, "[2] Run Game of Life")?;
        writeln!(self.output, "[q] Quit game")?;
        self.output.flush()?;
        Ok(())
    }

    fn add_cell(&mut self, board: &mut Board) -> Result<(), CliError> {
        let Some(x) = self.prompt_coordinate("Enter x coordinate: ")? else {
            return Ok(());
        };
        let Some(y) = self.prompt_coordinate("Enter y coordinate: ")? else {
            return Ok(());
        };

        match board.set_cell(x, y, true) {
            Ok(()) => {
                info!(x, y, "Cell set live");
                self.output.write_all(render::numbered(board).as_bytes())?;
            }
            Err(err) => {
                warn!(error = %err, "Rejected cell edit");
                writeln!(self.output, "{err}")?;
            }
        }
        Ok(())
    }

    fn prompt_coordinate(&mut self, prompt: &str) -> Result<Option<i64>, CliError> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let Some(token) = self.next_token()? else {
            return Ok(None);
        };
        if let Ok(value) = token.parse() {
            Ok(Some(value))
        } else {
            warn!(input = %token, "Rejected coordinate");
            writeln!(self.output, "'{token}' is not a whole number.")?;
            Ok(None)
        }
    }

    fn next_token(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.tokens.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use super::*;

    /// Run menu steps until one returns something other than `Continue`.
    fn run_session(input: &str, board: &mut Board) -> (MenuOutcome, String) {
        let mut menu = Menu::new(Cursor::new(input.to_owned()), Vec::new());
        menu.welcome().unwrap();
        let outcome = loop {
            match menu.step(board).unwrap() {
                MenuOutcome::Continue => {}
                other => break other,
            }
        };
        (outcome, String::from_utf8(menu.into_output()).unwrap())
    }

    #[test]
    fn parses_menu_commands() {
        assert_eq!("1".parse::<Command>(), Ok(Command::AddCell));
        assert_eq!("2".parse::<Command>(), Ok(Command::Run));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("x".parse::<Command>(), Err(UnknownCommand("x".to_owned())));
    }

    #[test]
    fn add_cell_then_quit() {
        let mut board = Board::new(3).unwrap();
        let (outcome, output) = run_session("1\n2\n0\nq\n", &mut board);

        assert_eq!(outcome, MenuOutcome::Quit);
        assert!(board.get_cell(2, 0).unwrap().state());
        assert_eq!(board.population(), 1);
        assert!(output.starts_with("Welcome to Conway's Game of Life!\n"));
        assert!(output.contains("Enter x coordinate: \n"));
        assert!(output.contains("Enter y coordinate: \n"));
        assert!(output.contains(" 0 |   |   | X |\n"));
    }

    #[test]
    fn tokens_may_share_a_line() {
        let mut board = Board::new(4).unwrap();
        let (outcome, _) = run_session("1 1 2 1 3 3 2\n", &mut board);

        assert_eq!(outcome, MenuOutcome::Run);
        assert!(board.get_cell(1, 2).unwrap().state());
        assert!(board.get_cell(3, 3).unwrap().state());
    }

    #[test]
    fn out_of_bounds_edit_is_reported_and_ignored() {
        let mut board = Board::new(3).unwrap();
        let (outcome, output) = run_session("1\n5\n0\nq\n", &mut board);

        assert_eq!(outcome, MenuOutcome::Quit);
        assert_eq!(board.population(), 0);
        assert!(output.contains("coordinates (5, 0) are outside the 3x3 board"));
    }

    #[test]
    fn non_numeric_coordinate_returns_to_menu() {
        let mut board = Board::new(3).unwrap();
        let (outcome, output) = run_session("1\nabc\nq\n", &mut board);

        assert_eq!(outcome, MenuOutcome::Quit);
        assert_eq!(board.population(), 0);
        assert!(output.contains("'abc' is not a whole number."));
    }

    #[test]
    fn unknown_option_is_reported() {
        let mut board = Board::new(3).unwrap();
        let (outcome, output) = run_session("7\n2\n", &mut board);

        assert_eq!(outcome, MenuOutcome::Run);
        assert!(output.contains("Please select one of the menu options!"));
        assert_eq!(output.matches("Select from the menu:").count(), 2);
    }

    #[test]
    fn end_of_input_quits() {
        let mut board = Board::new(3).unwrap();
        let (outcome, _) = run_session("", &mut board);
        assert_eq!(outcome, MenuOutcome::Quit);

        let (outcome, _) = run_session("1\n2\n", &mut board);
        assert_eq!(outcome, MenuOutcome::Quit);
        assert_eq!(board.population(), 0);
    }
}
