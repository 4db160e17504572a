use crate::*;

/// Network output for one move pair, in (user, computer, draw) order.
///
/// Values are independent sigmoid activations, not a distribution:
/// they need not sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forecast([Probability; OUTPUTS]);

impl Forecast {
    pub fn user(&self) -> Probability {
        self.0[Outcome::User.index()]
    }
    pub fn computer(&self) -> Probability {
        self.0[Outcome::Computer.index()]
    }
    pub fn draw(&self) -> Probability {
        self.0[Outcome::Draw.index()]
    }
    /// Likelihood assigned to a given outcome.
    pub fn of(&self, outcome: Outcome) -> Probability {
        self.0[outcome.index()]
    }
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|p| p.is_finite())
    }
}

impl From<[Probability; OUTPUTS]> for Forecast {
    fn from(values: [Probability; OUTPUTS]) -> Self {
        Self(values)
    }
}

impl std::fmt::Display for Forecast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "user {:.3} computer {:.3} draw {:.3}",
            self.user(),
            self.computer(),
            self.draw()
        )
    }
}
