//! Dictionary oracle
//!
//! The dictionary check is an injected capability rather than a hidden
//! platform service, so the backing word list can be swapped or mocked
//! without touching the validation pipeline.

use crate::wordlists::DICTIONARY;
use rustc_hash::FxHashSet;

/// Capability to test whether a normalized word is a real word
///
/// Implementations answer for a single configured language. The trait is
/// object-safe; the game and commands take `&dyn Dictionary`.
pub trait Dictionary {
    /// Whether `word` is a recognized word in this dictionary's language
    ///
    /// Callers pass already-normalized input (lowercase, trimmed).
    fn is_recognized_word(&self, word: &str) -> bool;

    /// IETF language tag of the dictionary, e.g. `"en"`
    fn language(&self) -> &str;
}

/// Dictionary backed by the word list embedded at build time
pub struct EmbeddedDictionary {
    words: FxHashSet<String>,
    language: String,
}

impl EmbeddedDictionary {
    /// The bundled English dictionary
    #[must_use]
    pub fn english() -> Self {
        Self::from_words(DICTIONARY.iter().copied(), "en")
    }

    /// Build a dictionary from an arbitrary word list
    ///
    /// Entries are lowercased so lookups match normalized input.
    pub fn from_words<'a, I>(words: I, language: &str) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            words: words.into_iter().map(str::to_lowercase).collect(),
            language: language.to_string(),
        }
    }

    /// Number of recognized words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary recognizes no words at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for EmbeddedDictionary {
    fn is_recognized_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn language(&self) -> &str {
        &self.language
    }
}
