// Library interface for wordle-bot
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod feedback;
pub mod game;
pub mod logging;
pub mod oracle;
pub mod solver;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::BotError;
pub use feedback::{LetterFeedback, ResultCode, is_solved};
pub use game::{Game, GameOutcome};
pub use oracle::{GameMode, GuessOracle, VoteeOracle};
pub use solver::{Constraints, filter_candidates, select_guess};
pub use wordbank::{EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str};
