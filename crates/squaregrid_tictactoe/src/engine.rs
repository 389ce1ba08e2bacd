//! Turn loop wiring board, rules, players, and notifications together.

use crate::{
    Board, EngineError, Listener, Move, NotificationHub, Player, RuleEngine, StandardRules,
    SubscriptionId, TurnQueue, Verdict,
};
use derive_getters::Getters;
use derive_more::Display;
use tracing::{debug, error, info, instrument};

/// Messages the engine publishes.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameEvent {
    /// Emitted once before the first turn.
    #[display("game has started")]
    Started,
    /// A player is about to move.
    #[display("{} turn", _0)]
    Turn(String),
    /// A player completed a line.
    #[display("{} has won the game !!!!!!", _0)]
    Won(String),
    /// Board filled without a winner.
    #[display("Game is Draw")]
    Draw,
}

/// Result of a finished game.
#[derive(Debug, Clone, Getters)]
pub struct GameOutcome {
    /// Terminal verdict: `Win` or `Draw`.
    verdict: Verdict,
    /// Name of the winning player.
    winner_name: Option<String>,
    /// Every move in the order it was played.
    moves: Vec<Move>,
    /// Final board.
    board: Board,
}

/// One game of N-by-N tic-tac-toe.
///
/// Owns the board, the rules, the turn queue, and the notification hub.
/// Built per game and consumed by [`play`](Self::play).
pub struct GameEngine {
    board: Board,
    rules: Box<dyn RuleEngine>,
    turns: TurnQueue,
    hub: NotificationHub,
    history: Vec<Move>,
    show_board: bool,
}

impl GameEngine {
    /// Creates a game on an empty `size` x `size` board with standard rules.
    ///
    /// Players move in the given order.
    ///
    /// # Errors
    ///
    /// Fails for a zero size or fewer than two players.
    #[instrument(skip(players), fields(players = players.len()))]
    pub fn new(size: usize, players: Vec<Player>) -> Result<Self, EngineError> {
        if players.len() < 2 {
            return Err(EngineError::TooFewPlayers(players.len()));
        }
        Ok(Self {
            board: Board::new(size)?,
            rules: Box::new(StandardRules),
            turns: TurnQueue::new(players)?,
            hub: NotificationHub::new(),
            history: Vec::new(),
            show_board: true,
        })
    }

    /// Replaces the rule engine.
    pub fn with_rules(mut self, rules: impl RuleEngine + 'static) -> Self {
        self.rules = Box::new(rules);
        self
    }

    /// Whether to publish the board before every turn. On by default.
    ///
    /// The final board is always published.
    pub fn with_board_display(mut self, show: bool) -> Self {
        self.show_board = show;
        self
    }

    /// Subscribes a listener to game messages.
    pub fn subscribe(&mut self, listener: impl Listener + 'static) -> SubscriptionId {
        self.hub.subscribe(listener)
    }

    /// Removes a listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.hub.unsubscribe(id)
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Turn order, starting with the player to move.
    pub fn turns(&self) -> &TurnQueue {
        &self.turns
    }

    /// Runs the turn loop until someone wins or the board fills.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Player` if a move source fails, and
    /// `EngineError::ContractViolation` if it returns an illegal position.
    /// The board is not modified by the failing turn.
    #[instrument(skip(self), fields(size = self.board.size(), players = self.turns.len()))]
    pub fn play(mut self) -> Result<GameOutcome, EngineError> {
        let order: Vec<_> = self.turns.iter().map(Player::name).collect();
        info!(?order, "Starting game");
        self.publish(GameEvent::Started);

        loop {
            if self.show_board {
                self.hub.publish_board(&self.board);
            }
            let name = self.turns.current().name().to_string();
            let mark = self.turns.current().mark();
            self.publish(GameEvent::Turn(name.clone()));

            let position = self.turns.current_mut().produce_move(&self.board)?;
            if !self.rules.is_valid_move(&self.board, position) {
                error!(player = %name, %position, "Move source returned an illegal move");
                return Err(EngineError::ContractViolation {
                    player: name,
                    position,
                });
            }
            self.board.apply_move(position, mark)?;
            self.history.push(Move::new(mark, position));
            debug!(player = %name, %mark, %position, "Move applied");

            let verdict = self.rules.evaluate(&self.board, mark);
            if !verdict.is_terminal() {
                self.turns.advance();
                continue;
            }
            let event = match verdict.winner() {
                Some(_) => GameEvent::Won(name.clone()),
                None => GameEvent::Draw,
            };

            self.hub.publish_board(&self.board);
            self.publish(event);
            info!(?verdict, moves = self.history.len(), "Game over");

            return Ok(GameOutcome {
                verdict,
                winner_name: verdict.winner().map(|_| name),
                moves: self.history,
                board: self.board,
            });
        }
    }

    fn publish(&mut self, event: GameEvent) {
        self.hub.publish(&event.to_string());
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("board", &self.board)
            .field("turns", &self.turns)
            .field("hub", &self.hub)
            .field("history", &self.history)
            .field("show_board", &self.show_board)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FirstAvailable, Mark, MessageLog, Position, ScriptedPlayer};

    fn scripted(name: &str, mark: Mark, moves: &[(usize, usize)]) -> Player {
        Player::new(name, mark, ScriptedPlayer::new(moves.iter().copied()))
    }

    #[test]
    fn test_needs_two_players() {
        let players = vec![scripted("solo", Mark::X, &[(0, 0)])];
        assert!(matches!(
            GameEngine::new(3, players),
            Err(EngineError::TooFewPlayers(1))
        ));
    }

    #[test]
    fn test_zero_size_board_rejected() {
        let players = vec![
            Player::new("a", Mark::X, FirstAvailable),
            Player::new("b", Mark::O, FirstAvailable),
        ];
        assert!(matches!(GameEngine::new(0, players), Err(EngineError::Board(_))));
    }

    #[test]
    fn test_single_cell_game_ends_after_one_move() {
        let players = vec![
            Player::new("a", Mark::X, FirstAvailable),
            Player::new("b", Mark::O, FirstAvailable),
        ];
        let log = MessageLog::new();
        let mut engine = GameEngine::new(1, players).unwrap();
        engine.subscribe(log.clone());

        let outcome = engine.play().unwrap();
        assert_eq!(*outcome.verdict(), Verdict::Win(Mark::X));
        assert_eq!(outcome.winner_name().as_deref(), Some("a"));
        assert_eq!(
            log.messages(),
            ["game has started", "a turn", "a has won the game !!!!!!"]
        );
    }

    #[test]
    fn test_illegal_scripted_move_is_contract_violation() {
        let players = vec![
            scripted("a", Mark::X, &[(1, 1)]),
            scripted("b", Mark::O, &[(1, 1)]),
        ];
        let err = GameEngine::new(3, players).unwrap().play().unwrap_err();
        match err {
            EngineError::ContractViolation { player, position } => {
                assert_eq!(player, "b");
                assert_eq!(position, Position::new(1, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_exhausted_script_surfaces_player_error() {
        let players = vec![scripted("a", Mark::X, &[(0, 0)]), scripted("b", Mark::O, &[])];
        let err = GameEngine::new(3, players).unwrap().play().unwrap_err();
        assert!(matches!(err, EngineError::Player(_)));
    }

    #[test]
    fn test_board_display_toggle() {
        let make = || {
            vec![
                Player::new("a", Mark::X, FirstAvailable),
                Player::new("b", Mark::O, FirstAvailable),
            ]
        };

        let shown = MessageLog::new();
        let mut engine = GameEngine::new(2, make()).unwrap();
        engine.subscribe(shown.clone());
        let outcome = engine.play().unwrap();
        // X (0,0), O (0,1), X (1,0) wins column 0: three turns plus the final board.
        assert_eq!(outcome.moves().len(), 3);
        assert_eq!(shown.boards().len(), 4);

        let hidden = MessageLog::new();
        let mut engine = GameEngine::new(2, make()).unwrap().with_board_display(false);
        engine.subscribe(hidden.clone());
        engine.play().unwrap();
        assert_eq!(hidden.boards().len(), 1);
    }

    #[test]
    fn test_custom_rules_are_used() {
        #[derive(Debug)]
        struct FirstMoveDraws;

        impl RuleEngine for FirstMoveDraws {
            fn evaluate(&self, _board: &Board, _just_moved: Mark) -> Verdict {
                Verdict::Draw
            }
        }

        let players = vec![
            Player::new("a", Mark::X, FirstAvailable),
            Player::new("b", Mark::O, FirstAvailable),
        ];
        let outcome = GameEngine::new(3, players)
            .unwrap()
            .with_rules(FirstMoveDraws)
            .play()
            .unwrap();
        assert_eq!(*outcome.verdict(), Verdict::Draw);
        assert_eq!(*outcome.winner_name(), None);
        assert_eq!(outcome.moves().len(), 1);
    }
}
