//! Queens command - Solve the N-queens placement problem

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{
        config::QueensConfig,
        output::{print_kv, print_section, print_subsection},
    },
    export::{PlacementExport, write_json},
    queens::{PlacementSolver, SolvePolicy, TraceEvent, TraceRecorder},
};

#[derive(Parser, Debug)]
#[command(about = "Place N non-attacking queens by backtracking")]
pub struct QueensArgs {
    /// Board size N
    #[arg(long, short = 'n')]
    pub size: Option<usize>,

    /// Enumerate every solution instead of stopping at the first
    #[arg(long)]
    pub all: bool,

    /// Print every place/remove step of the search
    #[arg(long)]
    pub trace: bool,

    /// Export solutions to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl From<&QueensArgs> for QueensConfig {
    fn from(args: &QueensArgs) -> Self {
        let defaults = QueensConfig::default();
        Self {
            size: args.size.unwrap_or(defaults.size),
            policy: if args.all {
                SolvePolicy::AllSolutions
            } else {
                defaults.policy
            },
            trace: args.trace,
        }
    }
}

pub fn execute(args: QueensArgs) -> Result<()> {
    let config = QueensConfig::from(&args);

    let mut recorder = TraceRecorder::new();
    let mut solver = PlacementSolver::new(config.size)?.with_policy(config.policy);
    if config.trace {
        solver = solver.with_observer(&mut recorder);
    }
    let outcome = solver.solve();
    let stats = solver.stats();
    let solutions = solver.into_solutions();

    print_section(&format!("{n}-Queens", n = config.size));
    print_kv("Policy", &format!("{:?}", config.policy));
    print_kv("Solved", if outcome.solved { "yes" } else { "no" });
    print_kv("Solutions found", &solutions.len().to_string());
    print_kv("Candidates tested", &stats.candidates.to_string());
    print_kv("Placements", &stats.placements.to_string());
    print_kv("Backtracks", &stats.removals.to_string());

    match &outcome.solution {
        Some(grid) => {
            print_subsection("First solution");
            println!("{grid}");
            let columns: Vec<String> = grid
                .queen_columns()
                .into_iter()
                .flatten()
                .map(|c| c.to_string())
                .collect();
            println!("\nColumns by row: [{}]", columns.join(", "));
        }
        None => println!("\nNo solution exists for N = {}.", config.size),
    }

    if config.trace {
        print_subsection("Search trace");
        for event in recorder.events() {
            match event {
                TraceEvent::Place { row, col } => println!("  place  ({row}, {col})"),
                TraceEvent::Remove { row, col } => println!("  remove ({row}, {col})"),
                TraceEvent::Solution { index } => println!("  solution #{}", index + 1),
            }
        }
    }

    if let Some(path) = args.export {
        let export = PlacementExport::new(config.size, config.policy, &solutions);
        write_json(&path, &export)
            .with_context(|| format!("failed to export solutions to {}", path.display()))?;
        println!("\nSolutions exported to: {}", path.display());
    }

    Ok(())
}
