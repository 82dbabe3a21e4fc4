//! Core domain types for the word-derivation game
//!
//! This module contains the round lifecycle and the submission-validation
//! pipeline. All types here are pure, testable, and free of any terminal or
//! I/O concerns.

pub mod round;
pub mod validate;

pub use round::{DEFAULT_ROOT, RoundState};
pub use validate::{Rejection, SubmissionOutcome, attempt_submission, normalize};
