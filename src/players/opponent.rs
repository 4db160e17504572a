use crate::*;

/// Anything that can pick the computer's throw for the next round.
///
/// Opponents are handed the user's move for the round being played along
/// with every round played so far. Choosing never fails: implementations
/// that can go wrong must recover on their own.
pub trait Opponent {
    /// Short label for display.
    fn name(&self) -> &'static str;
    /// Pick the computer's throw against `user`.
    fn choose(&mut self, user: Move, history: &History) -> Move;
}
