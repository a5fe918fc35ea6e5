use std::process::ExitCode;
use std::time::Duration;

use wordle_bot::cli::{Cli, parse_cli};
use wordle_bot::error::Result;
use wordle_bot::game::{Game, GameOutcome};
use wordle_bot::oracle::{GameMode, VoteeOracle};
use wordle_bot::wordbank::{EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str};
use wordle_bot::logging;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    let cli = parse_cli();

    let wordbank = match &cli.wordbank_path {
        Some(path) => match load_wordbank_from_file(path, cli.length) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load word bank from '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => load_wordbank_from_str(EMBEDDED_WORDBANK, cli.length),
    };
    if wordbank.is_empty() {
        eprintln!("Word bank holds no words of length {}.", cli.length);
        return ExitCode::FAILURE;
    }
    println!("Loaded {} words.", wordbank.len());

    match run(&cli, &wordbank).await {
        Ok(GameOutcome { solved, guesses }) => {
            println!("Result: solved={solved}, guesses={guesses}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Game aborted: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, wordbank: &[String]) -> Result<GameOutcome> {
    let mode = GameMode::from_name(&cli.mode, cli.seed, cli.target.clone())?;
    println!("Starting new {} game...", cli.mode);

    let oracle = VoteeOracle::new(cli.base_url.clone(), mode, cli.length);
    Game::new(Box::new(oracle), wordbank, cli.length)
        .with_max_guesses(cli.max_guesses)
        .with_round_delay(Duration::from_millis(cli.delay_ms))
        .play()
        .await
}
