use super::*;

/// Chronological, append-only record of every round in a session.
///
/// Rounds are numbered from 1 in the order they were played. There is no
/// way to remove or edit a round once pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History(Vec<Round>);

impl History {
    pub fn push(&mut self, round: Round) {
        self.0.push(round);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Rounds in the order they were played.
    pub fn rounds(&self) -> &[Round] {
        &self.0
    }
    /// Numbered rounds, most recent first.
    pub fn recent(&self) -> impl Iterator<Item = (usize, &Round)> {
        self.0.iter().enumerate().rev().map(|(i, r)| (i + 1, r))
    }
    /// Tally recomputed from every round.
    pub fn score(&self) -> Score {
        Score::aggregate(&self.0)
    }
}

impl FromIterator<Round> for History {
    fn from_iter<I: IntoIterator<Item = Round>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Round;
    type IntoIter = std::slice::Iter<'a, Round>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[rustfmt::skip]
impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        writeln!(f, "┌───────┬──────────┬──────────┬──────────┐")?;
        writeln!(f, "│ Round │     User │ Computer │   Winner │")?;
        writeln!(f, "├───────┼──────────┼──────────┼──────────┤")?;
        for (n, round) in self.recent() {
            writeln!(
                f,
                "│ {:>5} │ {:>8} │ {:>8} │ {:>8} │",
                n,
                round.user(),
                round.computer(),
                round.outcome(),
            )?;
        }
        writeln!(f, "└───────┴──────────┴──────────┴──────────┘")?;
        Ok(())
    }
}
