//! Submission validation
//!
//! The four-rule pipeline that judges a candidate word against the current
//! round: not containing the root, not already used, spellable from the
//! root's letters, and recognized by the dictionary. Checks run in that
//! fixed order and stop at the first failure.

use crate::core::RoundState;
use crate::dictionary::Dictionary;
use rustc_hash::FxHashMap;

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The normalized word passed every check
    Accepted(String),
    /// The word failed a check; the round is unchanged
    Rejected(Rejection),
}

/// Why a submission was rejected
///
/// All four kinds are informational, never fatal. Each carries a title and
/// message for the alert surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The candidate contains the root word
    SameAsRoot,
    /// The candidate was already accepted this round
    AlreadyUsed,
    /// The candidate needs letters the root does not have
    NotSpellableFromRoot,
    /// The dictionary does not recognize the candidate
    NotARecognizedWord,
}

impl Rejection {
    /// Alert title for this rejection
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::SameAsRoot => "Word is same as root",
            Self::AlreadyUsed => "Word used already",
            Self::NotSpellableFromRoot => "Word not possible",
            Self::NotARecognizedWord => "Word not recognized",
        }
    }

    /// Alert message for this rejection
    #[must_use]
    pub fn message(self, word: &str, root: &str) -> String {
        match self {
            Self::SameAsRoot => format!("'{word}' is the root word."),
            Self::AlreadyUsed => {
                format!("'{word}' has already been used. Try another one.")
            }
            Self::NotSpellableFromRoot => {
                format!("You can't spell that word from '{root}'!")
            }
            Self::NotARecognizedWord => "You can't just make them up, you know!".to_string(),
        }
    }
}

/// Normalize raw player input: lowercase and trim surrounding whitespace
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether the candidate contains the root word as a substring
///
/// This is deliberately stricter than equality: a candidate that merely
/// embeds the root anywhere is rejected as [`Rejection::SameAsRoot`].
#[must_use]
pub fn contains_root(candidate: &str, root: &str) -> bool {
    candidate.contains(root)
}

/// Whether the candidate has not been accepted yet this round
#[must_use]
pub fn is_original(candidate: &str, accepted_words: &[String]) -> bool {
    !accepted_words.iter().any(|word| word == candidate)
}

/// Whether the candidate can be spelled from the root's letters
///
/// A multiset-subset test, not a substring test: each candidate letter
/// consumes one remaining occurrence of that letter from the root, so a
/// letter cannot be reused more often than the root supplies it.
#[must_use]
pub fn is_spellable(candidate: &str, root: &str) -> bool {
    let mut remaining: FxHashMap<char, u32> = FxHashMap::default();
    for letter in root.chars() {
        *remaining.entry(letter).or_insert(0) += 1;
    }

    for letter in candidate.chars() {
        match remaining.get_mut(&letter) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }

    true
}

/// Validate raw input against the round
///
/// Normalizes the input first; blank or whitespace-only input produces no
/// outcome at all. Otherwise runs the four checks in fixed order and
/// short-circuits on the first failure.
///
/// Acceptance is not recorded here. The caller decides whether to feed an
/// [`SubmissionOutcome::Accepted`] word into
/// [`RoundState::record_acceptance`].
///
/// # Examples
/// ```
/// use scramble::core::{RoundState, SubmissionOutcome, attempt_submission};
/// use scramble::dictionary::EmbeddedDictionary;
///
/// let dictionary = EmbeddedDictionary::english();
/// let round = RoundState::with_root("silkworm");
///
/// let outcome = attempt_submission(&round, &dictionary, "Silk ");
/// assert_eq!(
///     outcome,
///     Some(SubmissionOutcome::Accepted("silk".to_string()))
/// );
/// ```
pub fn attempt_submission(
    round: &RoundState,
    dictionary: &dyn Dictionary,
    raw_input: &str,
) -> Option<SubmissionOutcome> {
    let word = normalize(raw_input);
    if word.is_empty() {
        return None;
    }

    let outcome = if contains_root(&word, round.root_word()) {
        SubmissionOutcome::Rejected(Rejection::SameAsRoot)
    } else if !is_original(&word, round.accepted_words()) {
        SubmissionOutcome::Rejected(Rejection::AlreadyUsed)
    } else if !is_spellable(&word, round.root_word()) {
        SubmissionOutcome::Rejected(Rejection::NotSpellableFromRoot)
    } else if !dictionary.is_recognized_word(&word) {
        SubmissionOutcome::Rejected(Rejection::NotARecognizedWord)
    } else {
        SubmissionOutcome::Accepted(word)
    };

    Some(outcome)
}
