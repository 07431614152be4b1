//! Selfplay command - Run a series of games with the minimax engine

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    cli::{
        config::{CommonConfig, GameConfig, SelfPlayConfig},
        output::{create_game_progress, print_kv, print_section},
    },
    export::{SelfPlayExport, write_json},
    search::{Opponent, play_match},
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Play a series of games with the minimax engine")]
pub struct SelfPlayArgs {
    /// Number of games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Opponent for the engine (minimax, random)
    #[arg(long, short = 'o')]
    pub opponent: Option<Opponent>,

    /// Mark played by the engine (`x` or `o`)
    #[arg(long)]
    pub engine: Option<Player>,

    /// Mark that opens each game (`x` or `o`)
    #[arg(long)]
    pub first: Option<Player>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl SelfPlayArgs {
    fn configs(&self) -> (CommonConfig, SelfPlayConfig) {
        let common = CommonConfig {
            seed: self.seed,
            progress: !self.no_progress,
            ..CommonConfig::default()
        };
        let defaults = SelfPlayConfig::default();
        let config = SelfPlayConfig {
            games: self.games.unwrap_or(defaults.games),
            opponent: self.opponent.unwrap_or(defaults.opponent),
            game: GameConfig {
                engine: self.engine.unwrap_or(defaults.game.engine),
                first: self.first.unwrap_or(defaults.game.first),
            },
        };
        (common, config)
    }
}

/// Play the configured series and tally it from the engine's side.
pub fn run_series(common: &CommonConfig, config: &SelfPlayConfig) -> Result<SelfPlayExport> {
    let mut rng = match common.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut export = SelfPlayExport::new(config.opponent, config.game.engine, common.seed);

    let progress = if common.progress && config.games > 1 {
        Some(create_game_progress(config.games as u64)?)
    } else {
        None
    };

    for _ in 0..config.games {
        let game = play_match(config.opponent, config.game.engine, config.game.first, &mut rng)?;
        export.record(&game);

        if let Some(pb) = &progress {
            pb.set_message(format!(
                "W:{} D:{} L:{}",
                export.wins, export.draws, export.losses
            ));
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(export)
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let (common, config) = args.configs();
    let export = run_series(&common, &config)?;

    print_section(&format!(
        "Minimax ({}) vs {} - {} games",
        config.game.engine, config.opponent, config.games
    ));
    print_kv("First to move", &config.game.first.to_string());
    if let Some(seed) = common.seed {
        print_kv("Seed", &seed.to_string());
    }
    print_kv("Wins", &export.wins.to_string());
    print_kv("Draws", &export.draws.to_string());
    print_kv("Losses", &export.losses.to_string());

    if let Some(path) = &args.export {
        write_json(path, &export)
            .with_context(|| format!("failed to export results to {}", path.display()))?;
        println!("\nResults exported to: {}", path.display());
    }

    Ok(())
}
