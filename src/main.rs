//! Scramble - CLI
//!
//! Word derivation game with TUI and CLI modes: spell as many words as you
//! can from the letters of a random root word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scramble::{
    commands::{check_word, derive_words, run_simple},
    dictionary::EmbeddedDictionary,
    output::{print_check_result, print_solve_result},
    wordlists::{
        DICTIONARY, START_WORDS,
        loader::{load_from_file, start_words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "scramble",
    about = "Word derivation game: spell as many words as you can from a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start words: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// Check a candidate word against a root word
    Check {
        /// The root word to check against
        root: String,

        /// The candidate word
        word: String,
    },

    /// List every dictionary word spellable from a root
    Solve {
        /// The root word to sweep
        root: String,

        /// Minimum word length to report
        #[arg(short = 'm', long, default_value = "3")]
        min_letters: usize,
    },
}

/// Load the start-word list based on the -w flag
///
/// A list that cannot be loaded is the single unrecoverable startup fault:
/// the error propagates out of `main` and terminates the process.
fn load_start_words(wordlist_mode: &str) -> Result<Vec<String>> {
    match wordlist_mode {
        "embedded" => Ok(start_words_from_slice(START_WORDS)),
        path => load_from_file(path)
            .with_context(|| format!("could not load start words from '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load the root-word pool based on the -w flag
    let start_words = load_start_words(&cli.wordlist)?;
    let dictionary = EmbeddedDictionary::english();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&start_words, &dictionary),
        Commands::Simple => {
            run_simple(&start_words, &dictionary).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check { root, word } => {
            let result = check_word(&root, &word, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Solve { root, min_letters } => {
            let result =
                derive_words(&root, DICTIONARY, min_letters).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(start_words: &[String], dictionary: &EmbeddedDictionary) -> Result<()> {
    use scramble::interactive::{App, run_tui};

    let app = App::new(start_words, dictionary);
    run_tui(app)
}
