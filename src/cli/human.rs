use crate::*;
use dialoguer::Select;

/// The person at the keyboard, choosing moves through a menu.
#[derive(Debug, Default)]
pub struct Human;

impl Human {
    const LABELS: [&'static str; 4] = ["Rock", "Paper", "Scissors", "Quit"];

    /// Prompt for the next move; `None` means the user quit.
    pub fn decide(&self, round: usize) -> anyhow::Result<Option<Move>> {
        let choice = Select::new()
            .with_prompt(format!("Round {}", round))
            .report(false)
            .items(&Self::LABELS)
            .default(0)
            .interact()?;
        Ok(Self::resolve(choice))
    }
    fn resolve(choice: usize) -> Option<Move> {
        Move::all().get(choice).copied()
    }
}
