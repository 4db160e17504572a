use super::*;

/// One completed exchange and its result.
///
/// Fields are private so a round can only be built by deciding it,
/// keeping `outcome` consistent with the two throws.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Round {
    user: Move,
    computer: Move,
    outcome: Outcome,
}

impl Round {
    pub fn user(&self) -> Move {
        self.user
    }
    pub fn computer(&self) -> Move {
        self.computer
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl From<(Move, Move)> for Round {
    fn from((user, computer): (Move, Move)) -> Self {
        Self {
            user,
            computer,
            outcome: Outcome::decide(user, computer),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {} ({})", self.user, self.computer, self.outcome)
    }
}
