use crate::*;

/// Logistic activation.
pub fn sigmoid(x: Probability) -> Probability {
    1. / (1. + (-x).exp())
}

/// Dense layer of sigmoid units.
///
/// `weights[j][k]` connects incoming unit `k` to this layer's unit `j`.
/// `changes` mirrors `weights` and holds the last applied update for momentum.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    inputs: usize,
    weights: Vec<Vec<Probability>>,
    biases: Vec<Probability>,
    changes: Vec<Vec<Probability>>,
}

impl Layer {
    /// Draw every weight and bias uniformly from [-range, range).
    pub fn random(inputs: usize, width: usize, range: Probability, rng: &mut impl rand::Rng) -> Self {
        let mut draw = || rng.random::<Probability>() * 2. * range - range;
        let weights = (0..width)
            .map(|_| (0..inputs).map(|_| draw()).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let biases = (0..width).map(|_| draw()).collect::<Vec<_>>();
        Self {
            inputs,
            weights,
            biases,
            changes: vec![vec![0.; inputs]; width],
        }
    }
    /// Number of units in this layer.
    pub fn width(&self) -> usize {
        self.biases.len()
    }
    /// Number of units feeding this layer.
    pub fn inputs(&self) -> usize {
        self.inputs
    }
    pub fn forward(&self, input: &[Probability]) -> Vec<Probability> {
        debug_assert!(input.len() == self.inputs());
        self.weights
            .iter()
            .zip(self.biases.iter())
            .map(|(row, bias)| {
                row.iter()
                    .zip(input.iter())
                    .map(|(w, x)| w * x)
                    .sum::<Probability>()
                    + bias
            })
            .map(sigmoid)
            .collect()
    }
    /// Error attributed to each incoming unit, given this layer's deltas.
    pub fn backward(&self, deltas: &[Probability]) -> Vec<Probability> {
        (0..self.inputs())
            .map(|k| {
                self.weights
                    .iter()
                    .zip(deltas.iter())
                    .map(|(row, delta)| row[k] * delta)
                    .sum::<Probability>()
            })
            .collect()
    }
    /// Apply one momentum-smoothed gradient step.
    pub fn adjust(
        &mut self,
        incoming: &[Probability],
        deltas: &[Probability],
        learning_rate: Probability,
        momentum: Probability,
    ) {
        for (j, delta) in deltas.iter().enumerate() {
            for (k, x) in incoming.iter().enumerate() {
                let change = learning_rate * delta * x + momentum * self.changes[j][k];
                self.changes[j][k] = change;
                self.weights[j][k] += change;
            }
            self.biases[j] += learning_rate * delta;
        }
    }
}
