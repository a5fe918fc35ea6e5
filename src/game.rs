use crate::error::Result;
use crate::feedback::is_solved;
use crate::oracle::GuessOracle;
use crate::solver::{Constraints, filter_candidates, select_guess};
use std::time::Duration;

pub const DEFAULT_MAX_GUESSES: u32 = 10;
pub const DEFAULT_ROUND_DELAY: Duration = Duration::from_millis(1000);

/// Terminal result of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub solved: bool,
    pub guesses: u32,
}

/// Drives one game to a terminal state: pick the first remaining candidate,
/// submit it, fold the feedback into the constraints, filter, repeat.
///
/// The constraints and the candidate pool belong to this value alone and are
/// fresh per game; `play` consumes the game so an instance cannot be reused.
pub struct Game {
    oracle: Box<dyn GuessOracle>,
    candidates: Vec<String>,
    constraints: Constraints,
    round: u32,
    max_guesses: u32,
    round_delay: Duration,
}

impl Game {
    #[must_use]
    pub fn new(oracle: Box<dyn GuessOracle>, wordbank: &[String], word_len: usize) -> Self {
        Game {
            oracle,
            candidates: wordbank.to_vec(),
            constraints: Constraints::new(word_len),
            round: 0,
            max_guesses: DEFAULT_MAX_GUESSES,
            round_delay: DEFAULT_ROUND_DELAY,
        }
    }

    #[must_use]
    pub fn with_max_guesses(mut self, max_guesses: u32) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    #[must_use]
    pub fn with_round_delay(mut self, round_delay: Duration) -> Self {
        self.round_delay = round_delay;
        self
    }

    /// Runs rounds until solved, the guess budget runs out, or the pool is
    /// emptied by filtering. The oracle call is the only other suspension
    /// point besides the fixed inter-round delay; rounds never overlap.
    pub async fn play(mut self) -> Result<GameOutcome> {
        let mut solved = false;

        while !solved && self.round < self.max_guesses && !self.candidates.is_empty() {
            let guess = select_guess(&self.candidates)?.clone();
            println!(
                "Guess {}/{}: {} ({} candidates)",
                self.round + 1,
                self.max_guesses,
                guess,
                self.candidates.len()
            );
            log::debug!("candidate pool: {:?}", self.candidates);

            let response = self.oracle.score(&guess).await?;
            self.round += 1;

            if is_solved(&response) {
                solved = true;
                println!("Solved in {} guesses: {}", self.round, guess);
                break;
            }

            if self.candidates.len() == 2 {
                // Two-candidate endgame: the guess just drawn from the first
                // word missed, so jump straight to the second word without
                // touching the constraints.
                self.candidates = vec![self.candidates[1].clone()];
            } else {
                self.constraints.update(&response);
                self.candidates = filter_candidates(&self.candidates, &self.constraints);
            }
            log::info!(
                "round {} done, {} candidates remain",
                self.round,
                self.candidates.len()
            );

            // Rate-limiting courtesy toward the oracle.
            tokio::time::sleep(self.round_delay).await;
        }

        if !solved {
            println!("Failed to solve after {} guesses.", self.round);
        }

        Ok(GameOutcome {
            solved,
            guesses: self.round,
        })
    }
}
