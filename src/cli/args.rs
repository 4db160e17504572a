use clap::Parser;
use clap::ValueEnum;
use std::path::PathBuf;

/// Which computer opponent to play against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Uniformly random throws
    Random,
    /// Retrains on every round and plays the reply it expects to win
    Adaptive,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Rock-Paper-Scissors in the terminal", long_about = None)]
pub struct Args {
    /// Computer opponent
    #[arg(short, long, value_enum, default_value_t = Variant::Adaptive)]
    pub opponent: Variant,
    /// Seed the opponent's random source for a reproducible game
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Terminal log level
    #[arg(long, default_value_t = log::LevelFilter::Warn)]
    pub log_level: log::LevelFilter,
    /// Also write a DEBUG log file into this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}
