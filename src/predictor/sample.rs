use crate::*;

/// Width of an encoded move pair: one-hot user move, then one-hot computer move.
pub const INPUTS: usize = 6;
/// Width of an encoded outcome: one-hot (user, computer, draw).
pub const OUTPUTS: usize = 3;

/// A training pair derived from one played round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub input: [Probability; INPUTS],
    pub target: [Probability; OUTPUTS],
}

impl Sample {
    /// Indicator encoding of a move pair.
    pub fn encode(user: Move, computer: Move) -> [Probability; INPUTS] {
        let mut input = [0.; INPUTS];
        input[user.index()] = 1.;
        input[3 + computer.index()] = 1.;
        input
    }
    /// Indicator encoding of a round's winner.
    pub fn target(outcome: Outcome) -> [Probability; OUTPUTS] {
        let mut target = [0.; OUTPUTS];
        target[outcome.index()] = 1.;
        target
    }
}

impl From<&Round> for Sample {
    fn from(round: &Round) -> Self {
        Self {
            input: Self::encode(round.user(), round.computer()),
            target: Self::target(round.outcome()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_user_then_computer() {
        assert_eq!(
            Sample::encode(Move::Paper, Move::Scissors),
            [0., 1., 0., 0., 0., 1.]
        );
        assert_eq!(
            Sample::encode(Move::Rock, Move::Rock),
            [1., 0., 0., 1., 0., 0.]
        );
    }

    #[test]
    fn target_marks_the_winner() {
        let sample = Sample::from(&Round::from((Move::Rock, Move::Paper)));
        assert_eq!(sample.target, [0., 1., 0.]);
        let sample = Sample::from(&Round::from((Move::Rock, Move::Rock)));
        assert_eq!(sample.target, [0., 0., 1.]);
    }
}
