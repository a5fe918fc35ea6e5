use crate::error::BotError;
use crate::feedback::{LetterFeedback, ResultCode};
use std::collections::{HashMap, HashSet};

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Per-slot admissible-letter sets, built up from oracle feedback over the
/// course of one game. A slot with no entry admits any letter; entries only
/// ever shrink.
#[derive(Debug, Clone)]
pub struct Constraints {
    word_len: usize,
    slots: HashMap<usize, HashSet<char>>,
}

impl Constraints {
    #[must_use]
    pub fn new(word_len: usize) -> Self {
        Constraints {
            word_len,
            slots: HashMap::new(),
        }
    }

    fn slot_entry(&mut self, slot: usize) -> &mut HashSet<char> {
        self.slots
            .entry(slot)
            .or_insert_with(|| ALPHABET.chars().collect())
    }

    /// Folds one oracle response into the per-slot sets, in entry order:
    /// - Correct pins the slot to that single letter for the rest of the game.
    /// - Present removes the letter from that slot only. No "must appear
    ///   elsewhere" constraint is recorded, so words with duplicate letters
    ///   are under-constrained.
    /// - Absent removes the letter from every slot, without cross-checking
    ///   Correct/Present entries for the same letter in the same response.
    ///   The entry-order dependence is intentional.
    pub fn update(&mut self, response: &[LetterFeedback]) {
        for fb in response {
            match fb.result {
                ResultCode::Correct => {
                    self.slots.insert(fb.slot, HashSet::from([fb.letter]));
                }
                ResultCode::Present => {
                    self.slot_entry(fb.slot).remove(&fb.letter);
                }
                ResultCode::Absent => {
                    for slot in 0..self.word_len {
                        self.slot_entry(slot).remove(&fb.letter);
                    }
                }
            }
        }
    }

    /// Whether `letter` is still admissible at `slot`. An untouched slot
    /// admits anything.
    #[must_use]
    pub fn admits(&self, slot: usize, letter: char) -> bool {
        match self.slots.get(&slot) {
            Some(letters) => letters.contains(&letter),
            None => true,
        }
    }
}

/// Keeps the words whose letter at every slot is still admissible, preserving
/// input order. The result is always a subset of the input.
#[must_use]
pub fn filter_candidates(candidates: &[String], constraints: &Constraints) -> Vec<String> {
    candidates
        .iter()
        .filter(|word| {
            word.chars()
                .enumerate()
                .all(|(slot, c)| constraints.admits(slot, c))
        })
        .cloned()
        .collect()
}

/// Next guess is always the first remaining candidate; callers guard against
/// an empty pool before invoking.
pub fn select_guess(candidates: &[String]) -> Result<&String, BotError> {
    candidates.first().ok_or(BotError::EmptyCandidates)
}
