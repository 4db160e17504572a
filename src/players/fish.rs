use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Opponent that throws uniformly at random and ignores the game entirely.
#[derive(Debug, Clone)]
pub struct Fish<R = SmallRng>(R);

impl<R: rand::Rng> Fish<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl Fish<SmallRng> {
    /// Reproducible fish for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Fish<SmallRng> {
    fn default() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl<R: rand::Rng> Opponent for Fish<R> {
    fn name(&self) -> &'static str {
        "random"
    }
    fn choose(&mut self, _: Move, _: &History) -> Move {
        Move::random(&mut self.0)
    }
}
