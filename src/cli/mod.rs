//! Interactive terminal game.
//!
//! Prompts for moves, plays them against the chosen opponent, and prints
//! the round, the running score, and the round table after every move.
mod args;
mod human;

pub use args::*;
pub use human::*;

use crate::*;
use clap::Parser;
use colored::Colorize;
use rand::rngs::SmallRng;

pub struct CLI {
    human: Human,
    session: Session,
}

impl From<&Args> for CLI {
    fn from(args: &Args) -> Self {
        Self {
            human: Human,
            session: Self::session(args.opponent, args.seed),
        }
    }
}

impl CLI {
    pub fn run() -> anyhow::Result<()> {
        let args = Args::parse();
        crate::log(args.log_level, args.log_dir.as_deref())?;
        let mut cli = Self::from(&args);
        log::info!("playing against the {} opponent", cli.session.opponent().name());
        println!("Rock Paper Scissors vs {} computer", cli.session.opponent().name());
        while let Some(user) = cli.human.decide(cli.session.history().len() + 1)? {
            cli.turn(user);
        }
        println!("Final score  {}", cli.session.score());
        Ok(())
    }
    fn session(variant: Variant, seed: Option<u64>) -> Session {
        match (variant, seed) {
            (Variant::Random, Some(seed)) => Session::new(Fish::seeded(seed)),
            (Variant::Random, None) => Session::new(Fish::<SmallRng>::default()),
            (Variant::Adaptive, Some(seed)) => Session::new(Learner::seeded(seed)),
            (Variant::Adaptive, None) => Session::new(Learner::<SmallRng>::default()),
        }
    }
    fn turn(&mut self, user: Move) {
        let round = self.session.play(user);
        println!();
        println!("{}", Self::banner(&round));
        println!("{}", self.session.score());
        print!("{}", self.session.history());
    }
    fn banner(round: &Round) -> String {
        let winner = match round.outcome() {
            Outcome::User => "you win".green().bold(),
            Outcome::Computer => "computer wins".red().bold(),
            Outcome::Draw => "draw".yellow().bold(),
        };
        format!(
            "You threw {}, computer threw {}: {}",
            round.user(),
            round.computer(),
            winner
        )
    }
}
