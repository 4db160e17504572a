//! Feed-forward sigmoid network that learns which move pairs win.
//!
//! The network maps an encoded (user move, computer move) pair to a
//! [`Forecast`] of who takes the round. It carries no state between
//! rounds: the adaptive opponent trains a fresh [`Network`] on the entire
//! history every time it is asked to move.
//!
//! - [`Sample`] — One-hot encoding of a round as an input/target pair
//! - [`Forecast`] — Network output read as per-side win likelihoods
//! - [`Hyperparameters`] — Training schedule and topology
//! - [`Layer`] — Dense sigmoid layer with momentum buffers
//! - [`Network`] — Stack of layers trained by backpropagation
mod forecast;
mod hyperparameters;
mod layer;
mod network;
mod sample;

pub use forecast::*;
pub use hyperparameters::*;
pub use layer::*;
pub use network::*;
pub use sample::*;
