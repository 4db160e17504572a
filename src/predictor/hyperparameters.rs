use crate::*;

/// Training schedule and network topology.
///
/// Defaults come from the crate-level training constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hyperparameters {
    /// Upper bound on passes over the samples.
    pub iterations: usize,
    /// Stop once the mean squared error of a pass falls below this.
    pub error_threshold: Energy,
    pub learning_rate: Probability,
    pub momentum: Probability,
    /// Half-width of the uniform range initial weights are drawn from.
    pub weight_range: Probability,
    /// Hidden layer width.
    pub hidden: usize,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            iterations: TRAINING_ITERATIONS,
            error_threshold: TRAINING_ERROR_THRESHOLD,
            learning_rate: LEARNING_RATE,
            momentum: MOMENTUM,
            weight_range: INITIAL_WEIGHT_RANGE,
            hidden: MIN_HIDDEN_NEURONS.max(INPUTS / 2),
        }
    }
}

impl Hyperparameters {
    /// Layer sizes from input to output.
    pub fn topology(&self) -> [usize; 3] {
        [INPUTS, self.hidden, OUTPUTS]
    }
}
