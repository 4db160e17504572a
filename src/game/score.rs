use super::*;

/// Win/loss/draw tally, always derived from rounds rather than stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub user: usize,
    pub computer: usize,
    pub draw: usize,
}

impl Score {
    /// Fold rounds into a tally, one counter per round.
    pub fn aggregate<'a>(rounds: impl IntoIterator<Item = &'a Round>) -> Self {
        rounds
            .into_iter()
            .map(Round::outcome)
            .fold(Self::default(), Self::add)
    }
    /// Number of rounds counted.
    pub fn total(&self) -> usize {
        self.user + self.computer + self.draw
    }
    fn add(mut self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::User => self.user += 1,
            Outcome::Computer => self.computer += 1,
            Outcome::Draw => self.draw += 1,
        }
        self
    }
}

impl From<&[Round]> for Score {
    fn from(rounds: &[Round]) -> Self {
        Self::aggregate(rounds)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You: {} Computer: {} Draw: {}",
            self.user, self.computer, self.draw
        )
    }
}
