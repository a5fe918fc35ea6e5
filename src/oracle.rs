use crate::error::{BotError, Result};
use crate::feedback::{LetterFeedback, RawFeedback};
use async_trait::async_trait;

pub const DEFAULT_BASE_URL: &str = "https://wordle.votee.dev:8000";

/// How the hidden target word is chosen on the server side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameMode {
    /// The server scores against today's word.
    Daily,
    /// The server scores against a seeded random word; without a seed the
    /// server picks one itself.
    Random { seed: Option<u64> },
    /// The target word is named explicitly in the request path.
    Word { target: String },
}

impl GameMode {
    /// Resolves a mode name from the CLI. Unknown names, and `word` without
    /// a target, are rejected up front rather than mid-game.
    pub fn from_name(name: &str, seed: Option<u64>, target: Option<String>) -> Result<Self> {
        match name {
            "daily" => Ok(GameMode::Daily),
            "random" => Ok(GameMode::Random { seed }),
            "word" => match target {
                Some(target) => Ok(GameMode::Word { target }),
                None => Err(BotError::InvalidMode(
                    "word mode requires --target".to_string(),
                )),
            },
            other => Err(BotError::InvalidMode(other.to_string())),
        }
    }
}

/// The external evaluator that scores a guess against the hidden target.
/// Exactly one call is in flight at a time per game.
#[async_trait]
pub trait GuessOracle: Send + Sync {
    async fn score(&self, guess: &str) -> Result<Vec<LetterFeedback>>;
}

/// HTTP oracle speaking the votee.dev API. Transport failures and non-2xx
/// statuses abort the game; there is no retry.
pub struct VoteeOracle {
    client: reqwest::Client,
    base_url: String,
    mode: GameMode,
    word_len: usize,
}

impl VoteeOracle {
    #[must_use]
    pub fn new(base_url: impl Into<String>, mode: GameMode, word_len: usize) -> Self {
        VoteeOracle {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            mode,
            word_len,
        }
    }

    fn request_for(&self, guess: &str) -> reqwest::RequestBuilder {
        let size = self.word_len.to_string();
        let request = match &self.mode {
            GameMode::Daily => self
                .client
                .get(format!("{}/daily", self.base_url))
                .query(&[("size", size.as_str())]),
            GameMode::Random { seed } => {
                let request = self
                    .client
                    .get(format!("{}/random", self.base_url))
                    .query(&[("size", size.as_str())]);
                match seed {
                    Some(seed) => request.query(&[("seed", seed.to_string())]),
                    None => request,
                }
            }
            // Word length is implied by the target; no size parameter.
            GameMode::Word { target } => self
                .client
                .get(format!("{}/word/{}", self.base_url, target)),
        };
        request.query(&[("guess", guess)])
    }
}

#[async_trait]
impl GuessOracle for VoteeOracle {
    async fn score(&self, guess: &str) -> Result<Vec<LetterFeedback>> {
        log::debug!("submitting guess {guess:?} ({:?})", self.mode);
        let response = self.request_for(guess).send().await?.error_for_status()?;
        let raw: Vec<RawFeedback> = response.json().await?;
        raw.into_iter().map(LetterFeedback::try_from).collect()
    }
}
