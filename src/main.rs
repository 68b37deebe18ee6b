//! Wordle - CLI
//!
//! Play Wordle in the terminal, either in a full-screen TUI or line by line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use wordle_game::{
    commands::{run_simple, score_guess},
    game::Dictionary,
    interactive::RESTART_DELAY,
    output::print_score_result,
    wordlists::loader,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a .json array or one-word-per-line file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for the answer draw, for reproducible rounds
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Seconds the end-of-round dialog stays up before a new round; 0 waits for a key
        #[arg(long, value_name = "SECS", default_value_t = RESTART_DELAY.as_secs())]
        auto_restart: u64,
    },

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show the hints a guess would get against an answer
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        answer: String,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => loader::embedded().context("embedded word list is invalid"),
        path => Ok(loader::load_from_file(path)?),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        auto_restart: RESTART_DELAY.as_secs(),
    });

    match command {
        Commands::Play { auto_restart } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_play_command(&dictionary, make_rng(cli.seed), auto_restart)
        }
        Commands::Simple => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_simple(&dictionary, &mut make_rng(cli.seed))
        }
        Commands::Score { guess, answer } => {
            let result = score_guess(&guess, &answer)?;
            print_score_result(&result.guess, &result.answer, &result.feedback);
            Ok(())
        }
    }
}

fn run_play_command(
    dictionary: &Dictionary,
    rng: StdRng,
    auto_restart: u64,
) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let mut app = App::new(dictionary, rng);
    app.auto_restart = restart_delay(auto_restart);
    run_tui(app)
}

fn restart_delay(secs: u64) -> Option<Duration> {
    (secs > 0).then_some(Duration::from_secs(secs))
}
