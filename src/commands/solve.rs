//! Derivation sweep command
//!
//! Sweeps a word pool in parallel and collects every word that could be
//! accepted for a given root.

use crate::core::normalize;
use crate::core::validate::{contains_root, is_spellable};
use rayon::prelude::*;

/// Result of sweeping the dictionary for a root
pub struct SolveResult {
    pub root: String,
    /// Derivable words, longest first, alphabetical within a length
    pub words: Vec<String>,
    pub pool_size: usize,
}

/// Find every pool word spellable from `root`
///
/// Applies the same rules a live submission would face: words containing the
/// root are excluded, letters are consumed per occurrence, and membership in
/// `pool` stands in for dictionary recognition. Words shorter than
/// `min_letters` are skipped.
///
/// # Errors
///
/// Returns an error if `root` normalizes to the empty string.
pub fn derive_words(root: &str, pool: &[&str], min_letters: usize) -> Result<SolveResult, String> {
    let root = normalize(root);
    if root.is_empty() {
        return Err("Root word is empty".to_string());
    }

    let mut words: Vec<String> = pool
        .par_iter()
        .filter(|word| word.chars().count() >= min_letters)
        .filter(|word| !contains_root(word, &root))
        .filter(|word| is_spellable(word, &root))
        .map(|&word| word.to_string())
        .collect();

    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    words.dedup();

    Ok(SolveResult {
        root,
        words,
        pool_size: pool.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const POOL: &[&str] = &[
        "silk", "worm", "milk", "rows", "moss", "silkworm", "silkworms", "ow", "dog",
    ];

    #[test]
    fn finds_spellable_pool_words() {
        let result = derive_words("silkworm", POOL, 3).unwrap();

        assert!(result.words.contains(&"silk".to_string()));
        assert!(result.words.contains(&"worm".to_string()));
        assert!(result.words.contains(&"milk".to_string()));
        assert!(result.words.contains(&"rows".to_string()));
    }

    #[test]
    fn excludes_words_containing_root() {
        let result = derive_words("silkworm", POOL, 3).unwrap();

        assert!(!result.words.contains(&"silkworm".to_string()));
        assert!(!result.words.contains(&"silkworms".to_string()));
    }

    #[test]
    fn excludes_unspellable_words() {
        let result = derive_words("silkworm", POOL, 3).unwrap();

        // "moss" needs a second 's'; "dog" needs letters the root lacks
        assert!(!result.words.contains(&"moss".to_string()));
        assert!(!result.words.contains(&"dog".to_string()));
    }

    #[test]
    fn respects_min_letters() {
        let with_short = derive_words("silkworm", POOL, 2).unwrap();
        assert!(with_short.words.contains(&"ow".to_string()));

        let without = derive_words("silkworm", POOL, 3).unwrap();
        assert!(!without.words.contains(&"ow".to_string()));
    }

    #[test]
    fn sorts_longest_first_then_alphabetical() {
        let result = derive_words("silkworm", POOL, 3).unwrap();

        let lengths: Vec<usize> = result.words.iter().map(String::len).collect();
        let mut sorted_lengths = lengths.clone();
        sorted_lengths.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted_lengths);

        for pair in result.words.windows(2) {
            if pair[0].len() == pair[1].len() {
                assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn every_result_would_pass_live_checks() {
        let result = derive_words("silkworm", POOL, 3).unwrap();

        for word in &result.words {
            assert!(!contains_root(word, "silkworm"));
            assert!(is_spellable(word, "silkworm"));
            assert!(POOL.contains(&word.as_str()));
        }
    }

    #[test]
    fn blank_root_is_an_error() {
        assert!(derive_words("   ", POOL, 3).is_err());
    }
}
