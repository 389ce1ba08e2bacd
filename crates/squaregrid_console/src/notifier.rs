//! Listener that prints game messages to the console.

use squaregrid_tictactoe::{Board, Console, Listener};
use std::io::{BufRead, Write};
use tracing::warn;

/// Prints every message as `<prefix><message>` and boards as a grid
/// followed by a blank line.
#[derive(Debug, Clone)]
pub struct ConsoleNotifier<R, W> {
    console: Console<R, W>,
    prefix: String,
}

impl<R: BufRead, W: Write> ConsoleNotifier<R, W> {
    /// Creates a notifier writing to `console`.
    pub fn new(console: Console<R, W>, prefix: impl Into<String>) -> Self {
        Self {
            console,
            prefix: prefix.into(),
        }
    }
}

impl<R: BufRead, W: Write> Listener for ConsoleNotifier<R, W> {
    fn notify(&mut self, message: &str) {
        if let Err(e) = self.console.write_line(&format!("{}{}", self.prefix, message)) {
            warn!(error = %e, "Failed to print notification");
        }
    }

    fn show_board(&mut self, board: &Board) {
        if let Err(e) = self.console.write_line(&format!("{}\n", board.render())) {
            warn!(error = %e, "Failed to print board");
        }
    }
}
