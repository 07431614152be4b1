//! Shared configuration types for CLI commands

use serde::{Deserialize, Serialize};

use crate::{queens::SolvePolicy, search::Opponent, tictactoe::Player};

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show progress bars
    pub progress: bool,

    /// Verbose output
    pub verbose: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            seed: None,
            progress: true,
            verbose: false,
        }
    }
}

impl CommonConfig {
    /// Log filter used when `RUST_LOG` is not set
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Placement search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueensConfig {
    /// Board size N
    pub size: usize,

    /// Stop at the first solution or enumerate all of them
    pub policy: SolvePolicy,

    /// Record and print every place/remove step
    pub trace: bool,
}

impl Default for QueensConfig {
    fn default() -> Self {
        Self {
            size: 8,
            policy: SolvePolicy::FirstSolution,
            trace: false,
        }
    }
}

/// Game configuration for `play` and `selfplay`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mark played by the minimax engine
    pub engine: Player,

    /// Mark that opens each game
    pub first: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            engine: Player::O,
            first: Player::X,
        }
    }
}

/// Self-play series configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Number of games
    pub games: usize,

    /// Who the engine plays against
    pub opponent: Opponent,

    pub game: GameConfig,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 10,
            opponent: Opponent::Random,
            game: GameConfig::default(),
        }
    }
}
