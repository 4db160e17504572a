use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Opponent that learns which replies have been winning.
///
/// Before every throw it trains a fresh [`Network`] on the complete
/// history, asks it how each of the three replies would fare against the
/// user's current move, and plays the one with the highest computer-win
/// forecast. Predictions that are not confident enough, and any training
/// or inference failure, fall back to a uniformly random throw drawn from
/// the same source.
#[derive(Debug, Clone)]
pub struct Learner<R = SmallRng> {
    rng: R,
    params: Hyperparameters,
    threshold: Probability,
}

impl<R: rand::Rng> Learner<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            params: Hyperparameters::default(),
            threshold: CONFIDENCE_THRESHOLD,
        }
    }
    pub fn with_params(self, params: Hyperparameters) -> Self {
        Self { params, ..self }
    }
    pub fn with_threshold(self, threshold: Probability) -> Self {
        Self { threshold, ..self }
    }
    /// The reply the network favours, or `None` if it is not confident.
    pub fn predict(&mut self, user: Move, history: &History) -> anyhow::Result<Option<Move>> {
        let samples = history.into_iter().map(Sample::from).collect::<Vec<_>>();
        let network = Network::trained(&samples, self.params, &mut self.rng)?;
        let candidates = Move::all()
            .into_iter()
            .map(|reply| {
                network
                    .run(&Sample::encode(user, reply))
                    .map(|forecast| (reply, forecast.computer()))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        log::debug!(
            "computer-win forecasts against {}: {}",
            user,
            candidates
                .iter()
                .map(|(m, p)| format!("{} {:.3}", m, p))
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(select(&candidates, self.threshold))
    }
}

impl Learner<SmallRng> {
    /// Reproducible learner for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Learner<SmallRng> {
    fn default() -> Self {
        Self::new(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl<R: rand::Rng> Opponent for Learner<R> {
    fn name(&self) -> &'static str {
        "adaptive"
    }
    fn choose(&mut self, user: Move, history: &History) -> Move {
        match self.predict(user, history) {
            Ok(Some(reply)) => reply,
            Ok(None) => {
                log::debug!("no reply above {:.2} confidence, throwing randomly", self.threshold);
                Move::random(&mut self.rng)
            }
            Err(e) if history.is_empty() => {
                log::debug!("{}, throwing randomly", e);
                Move::random(&mut self.rng)
            }
            Err(e) => {
                log::warn!("prediction failed: {}, throwing randomly", e);
                Move::random(&mut self.rng)
            }
        }
    }
}

/// Highest-scoring candidate, earliest on ties, if it clears `threshold`.
///
/// A best score equal to the threshold does not clear it.
pub fn select(candidates: &[(Move, Probability)], threshold: Probability) -> Option<Move> {
    candidates
        .iter()
        .copied()
        .reduce(|best, next| match next.1 > best.1 {
            true => next,
            false => best,
        })
        .filter(|(_, score)| *score > threshold)
        .map(|(reply, _)| reply)
}
