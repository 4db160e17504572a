use crate::*;
use anyhow::Context;

/// Summary of one call to [`Network::fit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Training {
    /// Passes actually run over the samples.
    pub iterations: usize,
    /// Mean squared error of the final pass.
    pub error: Energy,
}

/// Feed-forward sigmoid network, trained by per-sample backpropagation
/// with momentum.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
    params: Hyperparameters,
}

impl Network {
    /// Fresh network with weights drawn from `rng`.
    pub fn random(params: Hyperparameters, rng: &mut impl rand::Rng) -> Self {
        let sizes = params.topology();
        let layers = sizes
            .windows(2)
            .map(|pair| Layer::random(pair[0], pair[1], params.weight_range, rng))
            .collect();
        Self { layers, params }
    }
    /// Train a fresh network on `samples`.
    ///
    /// Fails before touching `rng` when there is nothing to learn from or
    /// the hidden layer has no units, and afterwards if training turns
    /// numerically unstable.
    pub fn trained(
        samples: &[Sample],
        params: Hyperparameters,
        rng: &mut impl rand::Rng,
    ) -> anyhow::Result<Self> {
        if samples.is_empty() {
            anyhow::bail!("cannot train on an empty history");
        }
        if params.hidden == 0 {
            anyhow::bail!("hidden layer needs at least one unit");
        }
        let mut network = Self::random(params, rng);
        network.fit(samples)?;
        Ok(network)
    }
    /// Run passes over `samples` until the error threshold or the iteration
    /// budget is reached.
    pub fn fit(&mut self, samples: &[Sample]) -> anyhow::Result<Training> {
        if samples.is_empty() {
            anyhow::bail!("cannot train on an empty history");
        }
        let mut iterations = 0;
        let mut error = Energy::INFINITY;
        while iterations < self.params.iterations && error >= self.params.error_threshold {
            error = samples.iter().map(|s| self.step(s)).sum::<Energy>() / samples.len() as Energy;
            iterations += 1;
            if !error.is_finite() {
                anyhow::bail!("training diverged after {} iterations", iterations);
            }
        }
        log::debug!(
            "trained on {} samples: {} iterations, error {:.5}",
            samples.len(),
            iterations,
            error
        );
        Ok(Training { iterations, error })
    }
    /// Mean squared error over `samples` without training.
    pub fn error(&self, samples: &[Sample]) -> Energy {
        samples
            .iter()
            .map(|s| {
                let output = self.forward(&s.input);
                Self::mse(&s.target, &output)
            })
            .sum::<Energy>()
            / samples.len().max(1) as Energy
    }
    /// Forecast who wins a round encoded as `input`.
    pub fn run(&self, input: &[Probability; INPUTS]) -> anyhow::Result<Forecast> {
        let output = self.forward(input);
        let output = <[Probability; OUTPUTS]>::try_from(output.as_slice())
            .context("network output has the wrong width")?;
        let forecast = Forecast::from(output);
        match forecast.is_finite() {
            true => Ok(forecast),
            false => Err(anyhow::anyhow!("network produced non-finite output")),
        }
    }
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    fn forward(&self, input: &[Probability]) -> Vec<Probability> {
        self.layers
            .iter()
            .fold(input.to_vec(), |x, layer| layer.forward(&x))
    }
    /// Input followed by every layer's output.
    fn activations(&self, input: &[Probability]) -> Vec<Vec<Probability>> {
        std::iter::once(input.to_vec())
            .chain(self.layers.iter().scan(input.to_vec(), |x, layer| {
                *x = layer.forward(x);
                Some(x.clone())
            }))
            .collect()
    }
    /// One backpropagation step on a single sample; returns its error
    /// measured before the update.
    fn step(&mut self, sample: &Sample) -> Energy {
        let activations = self.activations(&sample.input);
        let n = self.layers.len();
        let output = &activations[n];
        let error = Self::mse(&sample.target, output);
        let mut deltas = vec![Vec::new(); n];
        deltas[n - 1] = sample
            .target
            .iter()
            .zip(output.iter())
            .map(|(t, o)| (t - o) * o * (1. - o))
            .collect();
        for l in (1..n).rev() {
            deltas[l - 1] = self.layers[l]
                .backward(&deltas[l])
                .into_iter()
                .zip(activations[l].iter())
                .map(|(e, o)| e * o * (1. - o))
                .collect();
        }
        let (rate, momentum) = (self.params.learning_rate, self.params.momentum);
        for (l, layer) in self.layers.iter_mut().enumerate() {
            layer.adjust(&activations[l], &deltas[l], rate, momentum);
        }
        error
    }
    fn mse(target: &[Probability], output: &[Probability]) -> Energy {
        target
            .iter()
            .zip(output.iter())
            .map(|(t, o)| (t - o) * (t - o))
            .sum::<Energy>()
            / target.len() as Energy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    /// Rock against every reply, played `n` times over.
    fn rock_rounds(n: usize) -> Vec<Sample> {
        Move::all()
            .into_iter()
            .map(|c| Round::from((Move::Rock, c)))
            .cycle()
            .take(3 * n)
            .map(|r| Sample::from(&r))
            .collect()
    }

    #[test]
    fn empty_history_is_an_error() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert!(Network::trained(&[], Hyperparameters::default(), rng).is_err());
    }

    #[test]
    fn hidden_layer_without_units_is_an_error() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let params = Hyperparameters {
            hidden: 0,
            ..Hyperparameters::default()
        };
        assert!(Network::trained(&rock_rounds(1), params, rng).is_err());
    }

    #[test]
    fn default_topology_is_six_three_three() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let network = Network::random(Hyperparameters::default(), rng);
        let widths = network.layers().iter().map(Layer::width).collect::<Vec<_>>();
        assert_eq!(widths, vec![3, 3]);
        assert_eq!(network.layers()[0].inputs(), INPUTS);
    }

    #[test]
    fn untrained_forecasts_are_probabilities() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let network = Network::random(Hyperparameters::default(), rng);
        for c in Move::all() {
            let forecast = network.run(&Sample::encode(Move::Paper, c)).unwrap();
            for o in [Outcome::User, Outcome::Computer, Outcome::Draw] {
                assert!(forecast.of(o) > 0. && forecast.of(o) < 1.);
            }
        }
    }

    #[test]
    fn training_reduces_error() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let samples = rock_rounds(2);
        let mut network = Network::random(Hyperparameters::default(), rng);
        let before = network.error(&samples);
        let training = network.fit(&samples).unwrap();
        assert!(training.iterations > 0);
        assert!(training.error < before);
        assert!(network.error(&samples) < before);
    }

    #[test]
    fn learns_which_reply_wins() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let network = Network::trained(&rock_rounds(1), Hyperparameters::default(), rng).unwrap();
        let forecast = |c| network.run(&Sample::encode(Move::Rock, c)).unwrap();
        assert!(forecast(Move::Paper).computer() > 0.5);
        assert!(forecast(Move::Rock).draw() > 0.5);
        assert!(forecast(Move::Scissors).user() > 0.5);
        assert!(forecast(Move::Paper).computer() > forecast(Move::Rock).computer());
        assert!(forecast(Move::Paper).computer() > forecast(Move::Scissors).computer());
    }

    #[test]
    fn stops_at_iteration_budget() {
        let ref mut rng = SmallRng::seed_from_u64(4);
        let params = Hyperparameters {
            iterations: 5,
            ..Hyperparameters::default()
        };
        let mut network = Network::random(params, rng);
        assert_eq!(network.fit(&rock_rounds(1)).unwrap().iterations, 5);
    }

    #[test]
    fn divergence_is_an_error() {
        let ref mut rng = SmallRng::seed_from_u64(5);
        let params = Hyperparameters {
            learning_rate: Probability::NAN,
            ..Hyperparameters::default()
        };
        assert!(Network::trained(&rock_rounds(1), params, rng).is_err());
    }
}
