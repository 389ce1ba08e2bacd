//! Human player reading moves from a line-oriented text stream.

use super::MoveSource;
use crate::{Board, PlayerError, Position};
use derive_more::Display;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use tracing::{debug, instrument, warn};

/// Shared handle to one input stream and one output stream.
///
/// Every interactive player in a game reads from the same stream, so the
/// handle is cheap to clone and all clones see the same buffered input.
#[derive(Debug)]
pub struct Console<R, W> {
    input: Rc<RefCell<R>>,
    output: Rc<RefCell<W>>,
}

impl<R, W> Clone for Console<R, W> {
    fn clone(&self) -> Self {
        Self {
            input: Rc::clone(&self.input),
            output: Rc::clone(&self.output),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Rc::new(RefCell::new(input)),
            output: Rc::new(RefCell::new(output)),
        }
    }

    /// Reads one line without its line ending. `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced with `U+FFFD`, so a garbled line reaches
    /// the caller as text it can reject rather than as an I/O error.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.borrow_mut().read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Writes `text` without a newline and flushes.
    pub fn prompt(&self, text: &str) -> io::Result<()> {
        let mut out = self.output.borrow_mut();
        write!(out, "{}", text)?;
        out.flush()
    }

    /// Writes `text` followed by a newline.
    pub fn write_line(&self, text: &str) -> io::Result<()> {
        writeln!(self.output.borrow_mut(), "{}", text)
    }

    /// Runs `f` against the output stream.
    pub fn with_output<T>(&self, f: impl FnOnce(&mut W) -> T) -> T {
        f(&mut self.output.borrow_mut())
    }
}

/// Why a line of input is not a usable move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveInputError {
    /// Not two integers.
    #[display("Please input the valid moves as `row col` (got {:?})", _0)]
    Malformed(String),

    /// Row or column outside the board.
    #[display("Invalid move: ({}, {}) is off the board. Please try again", _0, _1)]
    OutOfRange(i64, i64),

    /// Cell already taken.
    #[display("Invalid move: {} is already taken. Please try again", _0)]
    Occupied(Position),
}

impl std::error::Error for MoveInputError {}

/// Outcome of parsing one line of move input.
pub type ParsedMove = Result<Position, MoveInputError>;

/// Parses `row col` (whitespace or comma separated) against `board`.
#[instrument(skip(board), fields(size = board.size()))]
pub fn parse_move(input: &str, board: &Board) -> ParsedMove {
    let malformed = || MoveInputError::Malformed(input.trim().to_string());
    let numbers = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse::<i64>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| malformed())?;
    let [row, col] = numbers[..] else {
        return Err(malformed());
    };

    let size = board.size() as i64;
    if !(0..size).contains(&row) || !(0..size).contains(&col) {
        return Err(MoveInputError::OutOfRange(row, col));
    }
    let position = Position::new(row as usize, col as usize);
    if !board.is_valid_move(position) {
        return Err(MoveInputError::Occupied(position));
    }
    Ok(position)
}

/// Interactive move source.
///
/// Prompts, reads a line, and re-prompts on anything that is not a legal
/// move. Never touches the board itself. Blocks until a legal move arrives
/// or the input ends.
#[derive(Debug, Clone)]
pub struct ConsolePlayer<R, W> {
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    /// Creates a player reading from `console`.
    pub fn new(console: Console<R, W>) -> Self {
        Self { console }
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsolePlayer<R, W> {
    #[instrument(skip(self, board), fields(size = board.size()))]
    fn produce_move(&mut self, board: &Board) -> Result<Position, PlayerError> {
        let max = board.size() - 1;
        let prompt = format!("Enter your move : row[0-{max}] , col[0-{max}] : ");
        loop {
            self.console.prompt(&prompt)?;
            let Some(line) = self.console.read_line()? else {
                return Err(PlayerError::new("Input closed before a move was entered"));
            };
            match parse_move(&line, board) {
                Ok(position) => {
                    debug!(%position, "Move read from console");
                    return Ok(position);
                }
                Err(err) => {
                    warn!(input = %line, error = %err, "Rejected console move");
                    self.console.write_line(&err.to_string())?;
                }
            }
        }
    }
}
