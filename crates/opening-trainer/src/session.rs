//! Interactive training loop.
//!
//! The loop reads one command or move per line and writes prompts and boards
//! to any [`Write`]r, so it runs the same over a terminal or in-memory
//! buffers. End of input ends the session.

use std::io::{self, BufRead, Write};

use rand::Rng;
use thiserror::Error;

use crate::render::{render_board, PieceStyle};
use crate::trainer::Trainer;

const RULE_WIDTH: usize = 60;

/// Errors that can occur while running a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// A line typed at the move prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Reset,
    ShowLine,
    ShowBoard,
    Move(String),
}

impl Command {
    pub fn parse(input: &str) -> Command {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "quit" => Command::Quit,
            "reset" => Command::Reset,
            "line" => Command::ShowLine,
            "board" => Command::ShowBoard,
            _ => Command::Move(input.to_string()),
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "yes" | "y")
}

/// Drives a [`Trainer`] from line-oriented input.
pub struct Session<'a, G, I, O> {
    trainer: &'a mut Trainer<G>,
    input: I,
    output: O,
    style: PieceStyle,
}

impl<'a, G: Rng, I: BufRead, O: Write> Session<'a, G, I, O> {
    pub fn new(trainer: &'a mut Trainer<G>, input: I, output: O, style: PieceStyle) -> Self {
        Session {
            trainer,
            input,
            output,
            style,
        }
    }

    /// Runs until the trainee quits, declines to continue, or input ends.
    pub fn run(&mut self) -> Result<(), SessionError> {
        self.banner()?;
        self.show_board()?;

        loop {
            if !self.trainer.has_more_moves() {
                writeln!(
                    self.output,
                    "\nCongratulations! You've reached the end of this opening line!"
                )?;
                match self.prompt("\nStart over? (yes/no): ")? {
                    Some(answer) if is_yes(&answer) => self.reset()?,
                    _ => break,
                }
                continue;
            }

            if self.trainer.is_player_turn() {
                if !self.player_turn()? {
                    break;
                }
            } else {
                self.computer_turn()?;
            }
        }

        Ok(())
    }

    /// Returns false when the session should end.
    fn player_turn(&mut self) -> Result<bool, SessionError> {
        writeln!(self.output, "\nCurrent line: {}", self.trainer.current_line())?;
        writeln!(self.output, "Your turn to move!")?;
        let Some(input) = self.prompt("Enter your move: ")? else {
            return Ok(false);
        };

        let text = match Command::parse(&input) {
            Command::Quit => {
                writeln!(self.output, "\nThanks for practicing!")?;
                return Ok(false);
            }
            Command::Reset => {
                self.reset()?;
                return Ok(true);
            }
            Command::ShowLine => {
                writeln!(self.output, "Current line: {}", self.trainer.current_line())?;
                return Ok(true);
            }
            Command::ShowBoard => {
                self.show_board()?;
                return Ok(true);
            }
            Command::Move(text) => text,
        };

        let check = self.trainer.check_player_move(&text);
        writeln!(self.output, "{}", check)?;
        if check.is_correct() {
            self.show_board()?;
            return Ok(true);
        }

        match self.prompt("\nTry again? (yes/no): ")? {
            None => Ok(false),
            Some(answer) if is_yes(&answer) => Ok(true),
            Some(_) => {
                writeln!(self.output, "\nStarting over...")?;
                self.reset()?;
                Ok(true)
            }
        }
    }

    fn computer_turn(&mut self) -> Result<(), SessionError> {
        match self.trainer.make_computer_move() {
            Some(mv) => {
                writeln!(self.output, "\nComputer plays: {}", mv)?;
                writeln!(self.output, "Current line: {}", self.trainer.current_line())?;
                self.show_board()
            }
            None => {
                writeln!(self.output, "\nNo more moves available in this line!")?;
                self.reset()
            }
        }
    }

    fn banner(&mut self) -> Result<(), SessionError> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "CHESS OPENING TRAINER")?;
        writeln!(self.output, "{}", rule)?;
        writeln!(
            self.output,
            "\nYou are playing as: {}",
            self.trainer.player_color().to_string().to_uppercase()
        )?;
        writeln!(self.output, "\nCommands:")?;
        writeln!(self.output, "  - Enter moves in algebraic notation (e.g., e4, Nf3, O-O)")?;
        writeln!(self.output, "  - 'quit' to exit")?;
        writeln!(self.output, "  - 'reset' to start over")?;
        writeln!(self.output, "  - 'line' to see current line")?;
        writeln!(self.output, "  - 'board' to show the board")?;
        writeln!(self.output, "{}", rule)?;
        Ok(())
    }

    fn show_board(&mut self) -> Result<(), SessionError> {
        let board = render_board(self.trainer.board().board(), self.style);
        write!(self.output, "{}", board)?;
        Ok(())
    }

    fn reset(&mut self) -> Result<(), SessionError> {
        self.trainer.reset();
        writeln!(self.output, "\nPosition reset!")?;
        self.show_board()
    }

    /// Writes `message` and reads one line. Returns `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>, SessionError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse(" QUIT\n"), Command::Quit);
        assert_eq!(Command::parse("reset"), Command::Reset);
        assert_eq!(Command::parse("line"), Command::ShowLine);
        assert_eq!(Command::parse("Board"), Command::ShowBoard);
        assert_eq!(Command::parse(" Nf3 "), Command::Move("Nf3".to_string()));
        assert_eq!(Command::parse(""), Command::Move(String::new()));
    }

    #[test]
    fn yes_answers() {
        assert!(is_yes("yes"));
        assert!(is_yes(" Y "));
        assert!(!is_yes("no"));
        assert!(!is_yes(""));
    }
}
