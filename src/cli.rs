use crate::simulation::{available_workers, SimConfig, Strategy};
use crate::utils::DEFAULT_MOVE_LIMIT;
use clap::{Parser, ValueEnum};

/// Movement-phase execution strategy
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Sequential,
    Concurrent,
}

/// CLI arguments for the ant simulation
#[derive(Parser, Debug)]
#[command(name = "ant_mania", about = "🐜 Ant invasion simulator on Hiveum")]
pub struct Args {
    /// Number of ants
    #[arg(short = 'n', long = "ants")]
    pub ants: u32,

    /// Path to the map file
    #[arg(short = 'm', long = "map")]
    pub map: String,

    /// Maximum moves before an ant settles
    #[arg(long, default_value_t = DEFAULT_MOVE_LIMIT)]
    pub max_moves: u32,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Execution strategy for the movement phase
    #[arg(long, value_enum, default_value = "sequential")]
    pub mode: Mode,

    /// Worker pool size for concurrent mode (default: hardware parallelism)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Stop after this many ticks even if ants could still move
    #[arg(long)]
    pub max_ticks: Option<u64>,

    /// Suppress fight logs (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}

impl Args {
    pub fn to_config(&self) -> SimConfig {
        let strategy = match self.mode {
            Mode::Sequential => Strategy::Sequential,
            Mode::Concurrent => Strategy::Concurrent {
                workers: self.workers.unwrap_or_else(available_workers).max(1),
            },
        };
        SimConfig {
            move_limit: self.max_moves,
            max_ticks: self.max_ticks,
            strategy,
            log_events: !self.suppress_events,
        }
    }
}
