//! End-to-end games driven through the engine.

use squaregrid_tictactoe::{
    Board, GameEngine, Mark, MessageLog, Move, MoveSource, Player, PlayerError, Position,
    RuleEngine, ScriptedPlayer, StandardRules, Verdict,
};
use std::cell::Cell;
use std::rc::Rc;

/// Scripted source that counts how often it was asked for a move.
struct Counted {
    inner: ScriptedPlayer,
    calls: Rc<Cell<usize>>,
}

impl MoveSource for Counted {
    fn produce_move(&mut self, board: &Board) -> Result<Position, PlayerError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.produce_move(board)
    }
}

fn counted(moves: &[(usize, usize)]) -> (Counted, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let source = Counted {
        inner: ScriptedPlayer::new(moves.iter().copied()),
        calls: Rc::clone(&calls),
    };
    (source, calls)
}

#[test]
fn test_top_row_win_stops_asking_for_moves() {
    // Both scripts hold spare moves that must never be requested.
    let (a, a_calls) = counted(&[(0, 0), (0, 1), (0, 2), (2, 2)]);
    let (b, b_calls) = counted(&[(1, 0), (1, 1), (2, 0)]);
    let players = vec![Player::new("A", Mark::X, a), Player::new("B", Mark::O, b)];

    let log = MessageLog::new();
    let mut engine = GameEngine::new(3, players).unwrap().with_board_display(false);
    engine.subscribe(log.clone());
    let outcome = engine.play().unwrap();

    assert_eq!(*outcome.verdict(), Verdict::Win(Mark::X));
    assert_eq!(outcome.winner_name().as_deref(), Some("A"));
    assert_eq!(a_calls.get(), 3);
    assert_eq!(b_calls.get(), 2);
    assert_eq!(
        log.messages(),
        [
            "game has started",
            "A turn",
            "B turn",
            "A turn",
            "B turn",
            "A turn",
            "A has won the game !!!!!!",
        ]
    );
    assert_eq!(
        log.boards(),
        [[" X | X | X ", "---+---+---", " O | O | . ", "---+---+---", " . | . | . "].join("\n")]
    );
}

#[test]
fn test_standard_fill_sequence_is_a_draw() {
    let players = vec![
        Player::new(
            "A",
            Mark::X,
            ScriptedPlayer::new([(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)]),
        ),
        Player::new("B", Mark::O, ScriptedPlayer::new([(0, 1), (1, 1), (1, 2), (2, 0)])),
    ];
    let log = MessageLog::new();
    let mut engine = GameEngine::new(3, players).unwrap();
    engine.subscribe(log.clone());
    let outcome = engine.play().unwrap();

    assert_eq!(*outcome.verdict(), Verdict::Draw);
    assert_eq!(*outcome.winner_name(), None);
    assert_eq!(outcome.moves().len(), 9);
    assert_eq!(outcome.moves()[8], Move::new(Mark::X, Position::new(2, 2)));
    assert!(outcome.board().is_full());

    let messages = log.messages();
    assert_eq!(messages.last().map(String::as_str), Some("Game is Draw"));
    assert_eq!(messages.iter().filter(|m| m.ends_with(" turn")).count(), 9);
    assert_eq!(messages.iter().filter(|m| *m == "game has started").count(), 1);
}

#[test]
fn test_three_player_rotation() {
    // 4x4 board, three players; marks may repeat across players.
    let players = vec![
        Player::new("a", Mark::X, ScriptedPlayer::new([(0, 0), (0, 1), (0, 2), (0, 3)])),
        Player::new("b", Mark::O, ScriptedPlayer::new([(1, 0), (1, 1), (1, 2)])),
        Player::new("c", Mark::O, ScriptedPlayer::new([(2, 0), (2, 1), (2, 2)])),
    ];
    let log = MessageLog::new();
    let mut engine = GameEngine::new(4, players).unwrap();
    engine.subscribe(log.clone());
    let outcome = engine.play().unwrap();

    assert_eq!(outcome.winner_name().as_deref(), Some("a"));
    let turns: Vec<_> = log
        .messages()
        .into_iter()
        .filter_map(|m| m.strip_suffix(" turn").map(str::to_string))
        .collect();
    assert_eq!(turns, ["a", "b", "c", "a", "b", "c", "a", "b", "c", "a"]);
}

#[test]
fn test_every_line_wins_for_sizes_one_to_five() {
    for n in 1..=5 {
        let mut lines: Vec<Vec<Position>> = Vec::new();
        for i in 0..n {
            lines.push((0..n).map(|j| Position::new(i, j)).collect());
            lines.push((0..n).map(|j| Position::new(j, i)).collect());
        }
        lines.push((0..n).map(|i| Position::new(i, i)).collect());
        lines.push((0..n).map(|i| Position::new(i, n - 1 - i)).collect());

        for line in lines {
            let mut board = Board::new(n).unwrap();
            for (k, pos) in line.iter().enumerate() {
                board.apply_move(*pos, Mark::O).unwrap();
                let verdict = StandardRules.evaluate(&board, Mark::O);
                if k + 1 == n {
                    assert_eq!(verdict, Verdict::Win(Mark::O), "n={n} line={line:?}");
                } else {
                    assert_ne!(verdict, Verdict::Win(Mark::O), "n={n} line={line:?}");
                }
            }
        }
    }
}

#[test]
fn test_valid_move_matches_bounds_and_occupancy() {
    let n = 4;
    let mut board = Board::new(n).unwrap();
    let taken = [Position::new(0, 3), Position::new(2, 2)];
    for pos in taken {
        board.apply_move(pos, Mark::X).unwrap();
    }
    for row in 0..n + 2 {
        for col in 0..n + 2 {
            let pos = Position::new(row, col);
            let expected = row < n && col < n && !taken.contains(&pos);
            assert_eq!(board.is_valid_move(pos), expected, "{pos}");
        }
    }
}
