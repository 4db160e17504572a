//! Computer opponents.
//!
//! Concrete types implementing [`Opponent`], each with its own way of
//! picking the computer's throw.
//!
//! ## Implementations
//!
//! - [`Fish`] — Uniformly random, stateless
//! - [`Learner`] — Retrains a [`Network`](crate::Network) on the history and
//!   plays the reply it expects to win, falling back to random
mod fish;
mod learner;
mod opponent;

pub use fish::*;
pub use learner::*;
pub use opponent::*;
