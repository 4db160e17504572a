//! Rock-Paper-Scissors against a random or self-training opponent.
//!
//! # Module Structure
//!
//! - `game` — Moves, outcomes, rounds, and the derived score
//! - `predictor` — Small sigmoid network retrained from round history
//! - `players` — Computer opponents (uniform [`Fish`], adaptive [`Learner`])
//! - `session` — Append-only round history bound to one opponent
//! - `cli` — Interactive terminal front-end (requires `cli` feature)
pub mod game;
pub mod players;
pub mod predictor;
pub mod session;

#[cfg(feature = "cli")]
pub mod cli;

pub use game::*;
pub use players::*;
pub use predictor::*;
pub use session::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Network activations, forecasts, and confidence levels.
pub type Probability = f32;
/// Training loss (mean squared error).
pub type Energy = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation from an injected source.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random(rng: &mut impl rand::Rng) -> Self;
}

// ============================================================================
// ADAPTIVE OPPONENT
// ============================================================================
/// Predictions whose best computer-win forecast does not exceed this are discarded.
pub const CONFIDENCE_THRESHOLD: Probability = 0.1;

// ============================================================================
// PREDICTOR TRAINING
// Per-sample backpropagation with momentum over the whole history.
// ============================================================================
/// Upper bound on passes over the training set.
pub const TRAINING_ITERATIONS: usize = 20_000;
/// Training stops early once mean squared error falls below this.
pub const TRAINING_ERROR_THRESHOLD: Energy = 0.005;
/// Step size applied to each weight delta.
pub const LEARNING_RATE: Probability = 0.3;
/// Fraction of the previous weight change carried into the next.
pub const MOMENTUM: Probability = 0.1;
/// Initial weights and biases are drawn from [-range, range).
pub const INITIAL_WEIGHT_RANGE: Probability = 0.2;
/// Smallest hidden layer width; wider inputs get `inputs / 2` units.
pub const MIN_HIDDEN_NEURONS: usize = 3;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at `level`, optionally mirrored at DEBUG
/// into a timestamped file under `dir`.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, dir: Option<&std::path::Path>) -> anyhow::Result<()> {
    use anyhow::Context;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    let mut loggers = Vec::<Box<dyn simplelog::SharedLogger>>::new();
    loggers.push(term);
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir).context("create log directory")?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .context("time moves slow")?
            .as_secs();
        let path = dir.join(format!("{}.log", time));
        let file = std::fs::File::create(&path)
            .with_context(|| format!("create log file {}", path.display()))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers).context("initialize logger")
}
