use thiserror::Error;

/// Errors that abort the current game. None of these are retried internally;
/// a fresh game starts from fresh state, so nothing leaks across runs.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("invalid game mode: {0}")]
    InvalidMode(String),

    #[error("oracle request failed: {0}")]
    OracleTransport(#[from] reqwest::Error),

    #[error("oracle sent an unrecognized result code: {0:?}")]
    UnrecognizedResultCode(String),

    #[error("no candidates remain to guess from")]
    EmptyCandidates,
}

pub type Result<T> = std::result::Result<T, BotError>;
