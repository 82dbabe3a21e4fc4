//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::core::{RoundState, SubmissionOutcome, attempt_submission};
use crate::dictionary::Dictionary;
use crate::output::formatters::length_badge;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(start_words: &[String], dictionary: &dyn Dictionary) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Scramble - Word Derivation Game              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Spell as many words as you can from the letters of the root word.");
    println!("Each word must be a real word you haven't used yet, and it may not");
    println!("contain the root word itself.\n");
    println!("Commands: 'quit' to exit, 'new' for a new round, 'words' to list finds\n");

    let mut rng = rand::rng();
    let mut round = RoundState::start(start_words, &mut rng);

    println!(
        "Your root word is {}",
        round.root_word().to_uppercase().bright_yellow().bold()
    );

    loop {
        let prompt = format!("[{} | score {}]", round.root_word(), round.score());
        let Some(input) = get_user_input(&prompt)? else {
            // Stdin closed
            println!("\nFinal score: {}\n", round.score());
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!(
                    "\nFinal score: {} from {}. Thanks for playing!\n",
                    round.score().to_string().bright_cyan().bold(),
                    round.root_word().to_uppercase()
                );
                return Ok(());
            }
            "new" | "n" => {
                round = RoundState::start(start_words, &mut rng);
                println!(
                    "\nNew round! Your root word is {}\n",
                    round.root_word().to_uppercase().bright_yellow().bold()
                );
                continue;
            }
            "words" | "list" => {
                if round.accepted_words().is_empty() {
                    println!("No words found yet.\n");
                } else {
                    for word in round.accepted_words() {
                        println!("  • {}", length_badge(word));
                    }
                    println!();
                }
                continue;
            }
            _ => {}
        }

        match attempt_submission(&round, dictionary, &input) {
            Some(SubmissionOutcome::Accepted(word)) => {
                println!(
                    "  {} {} (score: {})\n",
                    "✓".green().bold(),
                    length_badge(&word).bright_white(),
                    round.score() + 1
                );
                round.record_acceptance(word);
            }
            Some(SubmissionOutcome::Rejected(rejection)) => {
                let word = crate::core::normalize(&input);
                println!("  {} {}", "✗".red().bold(), rejection.title().red());
                println!("    {}\n", rejection.message(&word, round.root_word()));
            }
            None => {
                // Blank input is silently ignored
            }
        }
    }
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes_read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if bytes_read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
