//! Word check command
//!
//! Runs the submission rules against an arbitrary root/word pair and reports
//! each rule's verdict.

use crate::core::validate::{contains_root, is_spellable};
use crate::core::{Rejection, RoundState, SubmissionOutcome, attempt_submission, normalize};
use crate::dictionary::Dictionary;

/// Result of checking a candidate word against a root
pub struct CheckResult {
    pub root: String,
    pub word: String,
    pub free_of_root: bool,
    pub spellable: bool,
    pub recognized: bool,
    /// First failing rule, or `None` if the word would be accepted
    pub rejection: Option<Rejection>,
}

/// Check a candidate word against a root word
///
/// Both inputs are normalized first. The originality rule is vacuous here
/// (there is no round history), so the verdict covers the root, spellability,
/// and dictionary rules.
///
/// # Errors
///
/// Returns an error if either input normalizes to the empty string.
pub fn check_word(
    root: &str,
    word: &str,
    dictionary: &dyn Dictionary,
) -> Result<CheckResult, String> {
    let root = normalize(root);
    let word = normalize(word);

    if root.is_empty() {
        return Err("Root word is empty".to_string());
    }
    if word.is_empty() {
        return Err("Candidate word is empty".to_string());
    }

    let round = RoundState::with_root(root.clone());
    let rejection = match attempt_submission(&round, dictionary, &word) {
        Some(SubmissionOutcome::Rejected(rejection)) => Some(rejection),
        Some(SubmissionOutcome::Accepted(_)) | None => None,
    };

    Ok(CheckResult {
        free_of_root: !contains_root(&word, &root),
        spellable: is_spellable(&word, &root),
        recognized: dictionary.is_recognized_word(&word),
        root,
        word,
        rejection,
    })
}
