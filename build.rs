//! Build script to generate embedded word lists
//!
//! Reads word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Generate the root-word pool
    generate_word_list(
        "data/start_words.txt",
        &Path::new(&out_dir).join("start_words.rs"),
        "START_WORDS",
        "Bundled eight-letter root words for starting a round",
    );

    // Generate the recognized-word list
    generate_word_list(
        "data/dictionary.txt",
        &Path::new(&out_dir).join("dictionary.rs"),
        "DICTIONARY",
        "Recognized English words for the dictionary check",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/start_words.txt");
    println!("cargo:rerun-if-changed=data/dictionary.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Blank lines (including the trailing-newline artifact) are never selectable
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
