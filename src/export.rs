//! JSON export of search results
//!
//! Records are plain serde structs written with `serde_json` so they can be
//! loaded back by analysis scripts or by [`read_json`].

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    queens::{Grid, SolvePolicy},
    search::Opponent,
    tictactoe::{Game, GameOutcome, Player},
};

/// Solutions of one placement search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementExport {
    pub size: usize,
    pub policy: SolvePolicy,
    pub solved: bool,
    pub solution_count: usize,
    /// Queen column for each row, one entry per solution
    pub solutions: Vec<Vec<usize>>,
}

impl PlacementExport {
    pub fn new(size: usize, policy: SolvePolicy, solutions: &[Grid]) -> Self {
        Self {
            size,
            policy,
            solved: !solutions.is_empty(),
            solution_count: solutions.len(),
            solutions: solutions
                .iter()
                .map(|grid| grid.queen_columns().into_iter().flatten().collect())
                .collect(),
        }
    }
}

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub first: Player,
    pub moves: Vec<usize>,
    pub outcome: Option<GameOutcome>,
}

impl From<&Game> for GameRecord {
    fn from(game: &Game) -> Self {
        Self {
            first: game.first,
            moves: game.moves.iter().map(|m| m.position).collect(),
            outcome: game.outcome,
        }
    }
}

/// Tally of a self-play series from the engine's point of view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayExport {
    pub games: usize,
    pub opponent: Opponent,
    pub engine: Player,
    pub seed: Option<u64>,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub records: Vec<GameRecord>,
}

impl SelfPlayExport {
    pub fn new(opponent: Opponent, engine: Player, seed: Option<u64>) -> Self {
        Self {
            games: 0,
            opponent,
            engine,
            seed,
            wins: 0,
            draws: 0,
            losses: 0,
            records: Vec::new(),
        }
    }

    /// Count a finished game
    pub fn record(&mut self, game: &Game) {
        match game.outcome.map(|o| o.score_for(self.engine)) {
            Some(1) => self.wins += 1,
            Some(-1) => self.losses += 1,
            _ => self.draws += 1,
        }
        self.games += 1;
        self.records.push(GameRecord::from(game));
    }
}

/// Write `value` as pretty JSON to `path`.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> crate::Result<()> {
    let file = File::create(path).map_err(|source| crate::Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)?;
    Ok(())
}

/// Read a JSON export back.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> crate::Result<T> {
    let file = File::open(path).map_err(|source| crate::Error::Io {
        operation: format!("open {}", path.display()),
        source,
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
