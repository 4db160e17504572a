use super::*;

/// Which side took a round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    User,
    Computer,
    Draw,
}

impl Outcome {
    /// Decide a round from the user's and the computer's throws.
    ///
    /// Total over all nine pairs: equal throws draw, otherwise whoever
    /// threw the move that beats the other's wins.
    pub fn decide(user: Move, computer: Move) -> Self {
        match (user, computer) {
            (u, c) if u == c => Self::Draw,
            (Move::Rock, Move::Paper) => Self::Computer,
            (Move::Paper, Move::Scissors) => Self::Computer,
            (Move::Scissors, Move::Rock) => Self::Computer,
            _ => Self::User,
        }
    }
    /// Position in (user, computer, draw) order, matching predictor outputs.
    pub const fn index(&self) -> usize {
        *self as usize
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Computer => "computer",
            Self::Draw => "draw",
        }
    }
}

impl From<(Move, Move)> for Outcome {
    fn from((user, computer): (Move, Move)) -> Self {
        Self::decide(user, computer)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}
