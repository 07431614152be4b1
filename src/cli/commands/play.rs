//! Play command - Interactive game against the minimax engine

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::GameConfig,
        output::{describe_outcome, format_board},
    },
    search::Minimax,
    tictactoe::{Game, Player, Position},
};

#[derive(Parser, Debug)]
#[command(about = "Play tic-tac-toe against the minimax engine")]
pub struct PlayArgs {
    /// Mark you play (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub human: Player,

    /// Mark that moves first (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first: Player,
}

/// Run one interactive game reading moves from `input`.
///
/// Moves are a cell index `0-8` or `row col`. `quit` (or end of input)
/// abandons the game; the partial game is returned.
pub fn run_session<R: BufRead, W: Write>(
    config: &GameConfig,
    mut input: R,
    output: &mut W,
) -> Result<Game> {
    let mut engine = Minimax::new(config.engine);
    let mut game = Game::new(config.first);
    let human = config.engine.opponent();

    writeln!(output, "You are {human}. Enter a cell as `row col` or 0-8, `quit` to stop.")?;

    while !game.is_over() {
        if game.to_move == config.engine {
            let mut scratch = game.board;
            let Some(position) = engine.choose_move(&mut scratch) else {
                break;
            };
            game.play_at(position)?;
            writeln!(output, "\n{} plays {position}", config.engine)?;
            continue;
        }

        writeln!(output, "\n{}", format_board(&game.board))?;
        write!(output, "{human} to move> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || line.trim().eq_ignore_ascii_case("quit") {
            writeln!(output, "\nGame abandoned.")?;
            return Ok(game);
        }

        let attempt = Position::parse(line.trim()).and_then(|position| game.play_at(position));
        if let Err(e) = attempt {
            writeln!(output, "{e}")?;
        }
    }

    writeln!(output, "\n{}", format_board(&game.board))?;
    if let Some(outcome) = game.outcome() {
        writeln!(output, "\nGame over: {}", describe_outcome(outcome))?;
        if let Some(line) = game.winning_line() {
            writeln!(output, "Winning line: {line:?}")?;
        }
    }

    Ok(game)
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = GameConfig {
        engine: args.human.opponent(),
        first: args.first,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&config, stdin.lock(), &mut stdout)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::tictactoe::GameOutcome;

    #[test]
    fn test_engine_blocks_and_human_cannot_win() {
        let config = GameConfig {
            engine: Player::O,
            first: Player::X,
        };
        // The human tries the top row; the engine must stop it.
        let input = Cursor::new("0 0\n0 1\n2 2\n1 0\n2 1\n1 2\n");
        let mut output = Vec::new();
        let game = run_session(&config, input, &mut output).unwrap();

        assert_ne!(game.outcome(), Some(GameOutcome::Win(Player::X)));
        assert_eq!(game.moves[3].position, 2, "engine blocks the top row");
    }

    #[test]
    fn test_bad_input_is_reported_and_retried() {
        let config = GameConfig {
            engine: Player::O,
            first: Player::X,
        };
        let input = Cursor::new("9\nfoo\n1 1\nquit\n");
        let mut output = Vec::new();
        let game = run_session(&config, input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("out of bounds"));
        assert!(text.contains("Game abandoned."));
        assert_eq!(game.moves[0].position, 4);
        assert_eq!(game.moves.len(), 2);
    }

    #[test]
    fn test_engine_opens_when_first() {
        let config = GameConfig {
            engine: Player::X,
            first: Player::X,
        };
        let mut output = Vec::new();
        let game = run_session(&config, Cursor::new(""), &mut output).unwrap();
        assert_eq!(game.moves.len(), 1);
        assert_eq!(game.moves[0].player, Player::X);
    }
}
