//! N-by-N tic-tac-toe engine.
//!
//! The pieces are deliberately small and swappable:
//!
//! - [`Board`] owns the grid.
//! - [`RuleEngine`] turns a board into a [`Verdict`] ([`StandardRules`] by default).
//! - [`MoveSource`] yields positions; [`Player`] pairs one with a name and a [`Mark`].
//! - [`TurnQueue`] rotates players round-robin.
//! - [`NotificationHub`] fans text messages out to [`Listener`]s.
//! - [`GameEngine`] runs the turn loop.
//!
//! ```
//! use squaregrid_tictactoe::{GameEngine, Mark, MessageLog, Player, ScriptedPlayer, Verdict};
//!
//! let players = vec![
//!     Player::new("Dhiraj", Mark::X, ScriptedPlayer::new([(0, 0), (0, 1), (0, 2)])),
//!     Player::new("Suraj", Mark::O, ScriptedPlayer::new([(1, 0), (1, 1)])),
//! ];
//! let log = MessageLog::new();
//! let mut engine = GameEngine::new(3, players)?;
//! engine.subscribe(log.clone());
//!
//! let outcome = engine.play()?;
//! assert_eq!(*outcome.verdict(), Verdict::Win(Mark::X));
//! assert_eq!(log.messages().last().unwrap(), "Dhiraj has won the game !!!!!!");
//! # Ok::<(), squaregrid_tictactoe::EngineError>(())
//! ```

#![warn(missing_docs)]

mod board;
mod engine;
mod error;
mod notify;
mod players;
mod rules;
mod turn_queue;
mod types;

pub use board::Board;
pub use engine::{GameEngine, GameEvent, GameOutcome};
pub use error::{BoardError, EngineError, PlayerError};
pub use notify::{Listener, MessageLog, NotificationHub, SubscriptionId};
pub use players::{
    Console, ConsolePlayer, FirstAvailable, MoveInputError, MoveSource, ParsedMove, Player,
    ScriptedPlayer, parse_move,
};
pub use rules::{Line, RuleEngine, StandardRules, Verdict, winning_line};
pub use turn_queue::TurnQueue;
pub use types::{Cell, Mark, Move, Position};
