//! boardsearch CLI - exhaustive board searches from the terminal
//!
//! - N-queens backtracking (first solution or all of them)
//! - Minimax move choice for a tic-tac-toe board
//! - Interactive play against the minimax engine
//! - Self-play series against minimax or random opponents

use anyhow::Result;
use boardsearch::cli::{commands, config::CommonConfig};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "boardsearch")]
#[command(version, about = "Backtracking and minimax board searches", long_about = None)]
struct Cli {
    /// Log search statistics (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Place N non-attacking queens
    Queens(commands::queens::QueensArgs),

    /// Choose the minimax move for a tic-tac-toe board
    Move(commands::move_cmd::MoveArgs),

    /// Play tic-tac-toe against the engine
    Play(commands::play::PlayArgs),

    /// Run a series of engine games
    Selfplay(commands::selfplay::SelfPlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let common = CommonConfig {
        verbose: cli.verbose,
        ..CommonConfig::default()
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(common.log_level()))
        .init();

    match cli.command {
        Commands::Queens(args) => commands::queens::execute(args),
        Commands::Move(args) => commands::move_cmd::execute(args),
        Commands::Play(args) => commands::play::execute(args),
        Commands::Selfplay(args) => commands::selfplay::execute(args),
    }
}
