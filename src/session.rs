//! One game: an opponent and everything played against it.
use crate::*;

/// Owns the round history and the opponent for a single game.
///
/// Each call to [`Session::play`] is one indivisible step: the opponent
/// picks a throw from the history so far, the round is decided, and the
/// round is appended. Score and history are read back from here.
pub struct Session {
    history: History,
    opponent: Box<dyn Opponent>,
}

impl Session {
    pub fn new(opponent: impl Opponent + 'static) -> Self {
        Self {
            history: History::default(),
            opponent: Box::new(opponent),
        }
    }
    /// Play the user's move against the opponent and record the round.
    pub fn play(&mut self, user: Move) -> Round {
        let computer = self.opponent.choose(user, &self.history);
        let round = Round::from((user, computer));
        log::debug!("round {}: {}", self.history.len() + 1, round);
        self.history.push(round);
        round
    }
    pub fn score(&self) -> Score {
        self.history.score()
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    /// Numbered rounds, most recent first.
    pub fn recent(&self) -> impl Iterator<Item = (usize, &Round)> {
        self.history.recent()
    }
    pub fn opponent(&self) -> &dyn Opponent {
        self.opponent.as_ref()
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.score())?;
        write!(f, "{}", self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Opponent that replays a fixed script of throws.
    struct Scripted(std::vec::IntoIter<Move>);

    impl Opponent for Scripted {
        fn name(&self) -> &'static str {
            "scripted"
        }
        fn choose(&mut self, _: Move, _: &History) -> Move {
            self.0.next().unwrap_or(Move::Rock)
        }
    }

    fn scripted(moves: &[Move]) -> Session {
        Session::new(Scripted(moves.to_vec().into_iter()))
    }

    #[test]
    fn fresh_session_is_empty() {
        let session = Session::new(Fish::seeded(0));
        assert!(session.history().is_empty());
        assert_eq!(session.score(), Score::default());
        assert_eq!(session.opponent().name(), "random");
    }

    #[test]
    fn rock_beats_scissors() {
        let mut session = scripted(&[Move::Scissors]);
        let round = session.play(Move::Rock);
        assert_eq!(round.outcome(), Outcome::User);
        let score = session.score();
        assert_eq!((score.user, score.computer, score.draw), (1, 0, 0));
    }

    #[test]
    fn rock_draws_rock() {
        let mut session = scripted(&[Move::Rock]);
        assert_eq!(session.play(Move::Rock).outcome(), Outcome::Draw);
        let score = session.score();
        assert_eq!((score.user, score.computer, score.draw), (0, 0, 1));
    }

    #[test]
    fn two_wins_listed_latest_first() {
        let mut session = scripted(&[Move::Rock, Move::Scissors]);
        session.play(Move::Paper);
        session.play(Move::Rock);
        let score = session.score();
        assert_eq!((score.user, score.computer, score.draw), (2, 0, 0));
        let recent = session.recent().map(|(_, r)| *r).collect::<Vec<_>>();
        assert_eq!(
            recent,
            vec![
                Round::from((Move::Rock, Move::Scissors)),
                Round::from((Move::Paper, Move::Rock)),
            ]
        );
    }

    #[test]
    fn score_always_sums_to_rounds_played() {
        let mut session = Session::new(Fish::seeded(3));
        for (i, user) in Move::all().into_iter().cycle().take(50).enumerate() {
            session.play(user);
            assert_eq!(session.score().total(), i + 1);
            assert_eq!(session.history().len(), i + 1);
        }
    }

    #[test]
    fn opponent_sees_history_before_the_round() {
        use std::cell::RefCell;
        use std::rc::Rc;
        struct Counter(Rc<RefCell<Vec<usize>>>);
        impl Opponent for Counter {
            fn name(&self) -> &'static str {
                "counter"
            }
            fn choose(&mut self, _: Move, history: &History) -> Move {
                self.0.borrow_mut().push(history.len());
                Move::Rock
            }
        }
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut session = Session::new(Counter(seen.clone()));
        for _ in 0..3 {
            session.play(Move::Paper);
        }
        assert_eq!(*seen.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn learner_punishes_a_predictable_user() {
        let mut session = Session::new(Learner::seeded(21));
        let rounds = (0..30)
            .map(|_| session.play(Move::Rock))
            .collect::<Vec<_>>();
        assert!(
            rounds[25..]
                .iter()
                .all(|r| r.outcome() == Outcome::Computer),
            "{}",
            session
        );
    }
}
