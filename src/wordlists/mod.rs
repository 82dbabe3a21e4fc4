//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary plus a runtime
//! loader for custom start-word files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_valid_roots() {
        // All roots should be 8 letters, lowercase, no blanks
        for &word in START_WORDS {
            assert_eq!(word.len(), 8, "Root '{word}' is not 8 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Root '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_words_are_normalized() {
        for &word in DICTIONARY {
            assert!(!word.is_empty(), "Dictionary contains a blank entry");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn default_root_is_recognized_start_word() {
        assert!(START_WORDS.contains(&crate::core::DEFAULT_ROOT));
    }
}
