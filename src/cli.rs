use crate::game::DEFAULT_MAX_GUESSES;
use crate::oracle::DEFAULT_BASE_URL;
use clap::Parser;

/// Automated Wordle solver driven by a remote scoring API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Game mode: daily, random, or word
    #[arg(short, long, default_value = "daily")]
    pub mode: String,

    /// Seed for random mode; the server picks its own when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Target word for word mode
    #[arg(long)]
    pub target: Option<String>,

    /// Word length
    #[arg(long, default_value_t = 5)]
    pub length: usize,

    /// Maximum number of guesses before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_GUESSES)]
    pub max_guesses: u32,

    /// Pause between rounds, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Base URL of the scoring API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Path to a newline-delimited wordbank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}
