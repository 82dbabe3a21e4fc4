//! Display functions for command results

use super::formatters::{length_badge, section_rule, verdict_mark};
use crate::commands::{CheckResult, SolveResult};
use colored::Colorize;

/// Print the result of checking a word against a root
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", section_rule(60).cyan());
    println!(
        "Checking {} against root {}",
        result.word.to_uppercase().bright_yellow().bold(),
        result.root.to_uppercase().bright_white().bold()
    );
    println!("{}", section_rule(60).cyan());

    print_rule_line("Does not contain the root", result.free_of_root);
    print_rule_line("Spellable from the root's letters", result.spellable);
    print_rule_line("Recognized dictionary word", result.recognized);

    println!();
    match result.rejection {
        None => println!(
            "{}",
            format!("✅ '{}' would be accepted", result.word)
                .green()
                .bold()
        ),
        Some(rejection) => {
            println!("{}", format!("❌ {}", rejection.title()).red().bold());
            println!("   {}", rejection.message(&result.word, &result.root));
        }
    }
    println!();
}

fn print_rule_line(label: &str, pass: bool) {
    let mark = if pass {
        verdict_mark(true).green()
    } else {
        verdict_mark(false).red()
    };
    println!("  {mark} {label}");
}

/// Print the result of a derivation sweep, grouped by word length
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", section_rule(60).cyan());
    println!(
        "Words hidden in {}",
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", section_rule(60).cyan());

    if result.words.is_empty() {
        println!("\nNo derivable words in the {}-word pool.", result.pool_size);
        println!();
        return;
    }

    let mut current_len = 0;
    for word in &result.words {
        if word.len() != current_len {
            current_len = word.len();
            println!("\n{}", format!("{current_len} letters").bright_white().bold());
        }
        println!("  • {}", length_badge(word));
    }

    println!(
        "\n{}",
        format!(
            "{} words found (pool of {})",
            result.words.len(),
            result.pool_size
        )
        .green()
        .bold()
    );
    println!();
}
