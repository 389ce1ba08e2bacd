//! Wires configuration, console, and engine into one game.

use crate::config::{GameConfig, PlayerKind, validate_board_size};
use crate::notifier::ConsoleNotifier;
use anyhow::{Result, bail};
use squaregrid_tictactoe::{
    Console, ConsolePlayer, FirstAvailable, GameEngine, GameOutcome, Player, ScriptedPlayer,
};
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};

/// Asks for the board size until a number within bounds is entered.
///
/// # Errors
///
/// Fails if the input ends or the console cannot be written.
#[instrument(skip(console))]
pub fn prompt_board_size<R: BufRead, W: Write>(console: &Console<R, W>) -> Result<usize> {
    loop {
        console.write_line("Please enter the size of the board")?;
        let Some(line) = console.read_line()? else {
            bail!("Input closed before a board size was entered");
        };
        let size = line
            .trim()
            .parse::<usize>()
            .map_err(|_| format!("Not a number: {:?}", line.trim()))
            .and_then(|n| validate_board_size(n).map_err(|e| e.message));
        match size {
            Ok(size) => {
                console.write_line(&format!("Size of the board will be {}", size))?;
                return Ok(size);
            }
            Err(reason) => {
                warn!(input = %line, %reason, "Rejected board size");
                console.write_line(&reason)?;
            }
        }
    }
}

/// Builds the players described by `config`.
///
/// Console players all share `console`.
#[instrument(skip_all, fields(players = config.players().len()))]
pub fn build_players<R, W>(config: &GameConfig, console: &Console<R, W>) -> Vec<Player>
where
    R: BufRead + 'static,
    W: Write + 'static,
{
    config
        .players()
        .iter()
        .map(|p| match p.kind() {
            PlayerKind::Console => {
                Player::new(p.name(), *p.mark(), ConsolePlayer::new(console.clone()))
            }
            PlayerKind::Scripted => Player::new(
                p.name(),
                *p.mark(),
                ScriptedPlayer::new(p.moves().iter().map(|&[row, col]| (row, col))),
            ),
            PlayerKind::FirstAvailable => Player::new(p.name(), *p.mark(), FirstAvailable),
        })
        .collect()
}

/// Plays one game described by `config` on `console`.
///
/// # Errors
///
/// Fails on invalid configuration, closed input, or a broken move source.
#[instrument(skip_all)]
pub fn run_game<R, W>(config: &GameConfig, console: Console<R, W>) -> Result<GameOutcome>
where
    R: BufRead + 'static,
    W: Write + 'static,
{
    config.validate()?;
    let size = match config.board_size() {
        Some(size) => *size,
        None => prompt_board_size(&console)?,
    };

    let players = build_players(config, &console);
    let mut engine = GameEngine::new(size, players)?.with_board_display(*config.show_board());
    engine.subscribe(ConsoleNotifier::new(
        console.clone(),
        config.notifier_prefix().clone(),
    ));

    let outcome = engine.play()?;
    info!(
        verdict = ?outcome.verdict(),
        winner = ?outcome.winner_name(),
        moves = outcome.moves().len(),
        "Game finished"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerConfig;
    use squaregrid_tictactoe::Mark;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        console.with_output(|out| String::from_utf8(out.clone()).unwrap())
    }

    #[test]
    fn test_size_prompt_reprompts_until_in_bounds() {
        let console = console("zero\n0\n17\n4\n");
        assert_eq!(prompt_board_size(&console).unwrap(), 4);

        let text = output(&console);
        assert_eq!(text.matches("Please enter the size of the board").count(), 4);
        assert!(text.contains("Not a number: \"zero\""));
        assert!(text.ends_with("Size of the board will be 4\n"));
    }

    #[test]
    fn test_size_prompt_reprompts_after_invalid_utf8() {
        let console = Console::new(Cursor::new(b"\xff\n3\n".to_vec()), Vec::new());
        assert_eq!(prompt_board_size(&console).unwrap(), 3);
        assert_eq!(output(&console).matches("Not a number").count(), 1);
    }

    #[test]
    fn test_size_prompt_fails_on_closed_input() {
        assert!(prompt_board_size(&console("")).is_err());
    }

    #[test]
    fn test_build_players_keeps_order_and_kinds() {
        let config = GameConfig::default().with_players(vec![
            PlayerConfig::new("a", Mark::X, PlayerKind::Scripted).with_moves([[0, 0]]),
            PlayerConfig::new("b", Mark::O, PlayerKind::Console),
            PlayerConfig::new("c", Mark::O, PlayerKind::FirstAvailable),
        ]);
        let players = build_players(&config, &console(""));
        let names: Vec<_> = players.iter().map(Player::name).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
