//! Rules of the game: what can be thrown, who wins, and how it adds up.
//!
//! - [`Move`] — Rock, Paper, or Scissors
//! - [`Outcome`] — Which side took a round
//! - [`Round`] — One completed exchange, immutable once decided
//! - [`History`] — Append-only sequence of rounds
//! - [`Score`] — Win/loss/draw tally derived from a history
mod history;
mod moves;
mod outcome;
mod round;
mod score;

pub use history::*;
pub use moves::*;
pub use outcome::*;
pub use round::*;
pub use score::*;
