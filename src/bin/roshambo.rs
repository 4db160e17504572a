//! Roshambo Binary
//!
//! Play Rock-Paper-Scissors in the terminal against a random or adaptive
//! computer opponent.
//!
//! Options: --opponent random|adaptive, --seed, --log-level, --log-dir

fn main() -> anyhow::Result<()> {
    roshambo::cli::CLI::run()
}
