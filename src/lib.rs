//! Scramble
//!
//! A single-screen word-derivation game: given a random root word, submit
//! words spellable from its letters. Each submission must pass four checks —
//! not containing the root, not already used, spellable from the root's
//! letters, and recognized by the dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use scramble::core::{RoundState, SubmissionOutcome, attempt_submission};
//! use scramble::dictionary::EmbeddedDictionary;
//!
//! let dictionary = EmbeddedDictionary::english();
//! let mut round = RoundState::with_root("silkworm");
//!
//! if let Some(SubmissionOutcome::Accepted(word)) =
//!     attempt_submission(&round, &dictionary, "silk")
//! {
//!     round.record_acceptance(word);
//! }
//! assert_eq!(round.score(), 1);
//! ```

// Core domain types
pub mod core;

// Dictionary oracle
pub mod dictionary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
