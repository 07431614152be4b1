//! Move command - Pick the minimax move for a given board

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{describe_outcome, format_board, print_kv},
    search::{Minimax, best_scored},
    tictactoe::{Board, GameOutcome, Player, Position},
};

#[derive(Parser, Debug)]
#[command(about = "Choose the minimax move for a board")]
pub struct MoveArgs {
    /// Board as 9 cells, row-major, e.g. "X...O...." (whitespace ignored)
    pub board: String,

    /// Mark to move for (`x` or `o`); inferred from mark counts when omitted
    #[arg(long)]
    pub ai: Option<Player>,

    /// Print the minimax value of every candidate cell
    #[arg(long)]
    pub explain: bool,
}

/// What the command decided for a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveDecision {
    Finished(GameOutcome),
    Play {
        position: Position,
        scored: Vec<(Position, i32)>,
    },
}

/// Validate `board` and run the search for `ai`.
pub fn decide(board: &Board, ai: Player) -> crate::Result<MoveDecision> {
    board.validate()?;

    if let Some(winner) = board.winner() {
        return Ok(MoveDecision::Finished(GameOutcome::Win(winner)));
    }

    let mut scratch = *board;
    let mut engine = Minimax::new(ai);
    let scored = engine.scored_moves(&mut scratch);

    Ok(match best_scored(&scored) {
        Some((position, _)) => MoveDecision::Play { position, scored },
        None => MoveDecision::Finished(GameOutcome::Draw),
    })
}

pub fn execute(args: MoveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("could not parse board '{}'", args.board))?;
    let ai = args.ai.unwrap_or_else(|| board.side_to_move());

    println!("{}\n", format_board(&board));
    print_kv("Searching for", &ai.to_string());

    match decide(&board, ai)? {
        MoveDecision::Finished(outcome) => {
            print_kv("Game over", &describe_outcome(outcome));
            println!("\nno legal move");
        }
        MoveDecision::Play { position, scored } => {
            if args.explain {
                println!("\nCandidate values (+1 win, 0 draw, -1 loss):");
                for (candidate, score) in &scored {
                    println!("  ({candidate}) -> {score:+}");
                }
            }
            println!("\n{position}");
        }
    }

    Ok(())
}
