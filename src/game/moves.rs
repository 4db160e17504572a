use crate::Arbitrary;

/// A throw in Rock-Paper-Scissors.
///
/// Declaration order (R, P, S) is the canonical ordering used for
/// tie-breaking and one-hot encoding.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    /// Beats Scissors, loses to Paper.
    Rock,
    /// Beats Rock, loses to Scissors.
    Paper,
    /// Beats Paper, loses to Rock.
    Scissors,
}

impl Move {
    /// All moves in canonical order.
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    /// The move this one defeats.
    pub const fn beats(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
    /// Position in canonical order.
    pub const fn index(&self) -> usize {
        *self as usize
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }
}

impl Arbitrary for Move {
    fn random(rng: &mut impl rand::Rng) -> Self {
        Self::from(rng.random_range(0..3usize))
    }
}

impl From<usize> for Move {
    fn from(i: usize) -> Self {
        match i % 3 {
            0 => Self::Rock,
            1 => Self::Paper,
            _ => Self::Scissors,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}
