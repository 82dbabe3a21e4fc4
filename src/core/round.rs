//! Round state and lifecycle
//!
//! A `RoundState` owns everything that varies over one round: the root word,
//! the accepted words, the running score, and the in-progress input.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Fallback root used when the start-word list is unexpectedly empty.
///
/// Callers are expected to pass a non-empty list; the fallback exists so a
/// degenerate list yields a playable round instead of a panic.
pub const DEFAULT_ROOT: &str = "silkworm";

/// State of a single round
///
/// Mutated only through [`RoundState::record_acceptance`] and the
/// pending-input editing methods, so the round invariants (no duplicate
/// accepted words, score equal to the accepted count) hold by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    root_word: String,
    accepted_words: Vec<String>,
    score: u32,
    pending_input: String,
}

impl RoundState {
    /// Start a fresh round with a root drawn uniformly at random
    ///
    /// Replaces all four fields at once: empty accepted list, zero score,
    /// empty pending input. Falls back to [`DEFAULT_ROOT`] if `start_words`
    /// is empty.
    ///
    /// # Examples
    /// ```
    /// use scramble::core::RoundState;
    ///
    /// let words = vec!["silkworm".to_string()];
    /// let round = RoundState::start(&words, &mut rand::rng());
    /// assert_eq!(round.root_word(), "silkworm");
    /// assert_eq!(round.score(), 0);
    /// ```
    pub fn start<R: Rng + ?Sized>(start_words: &[String], rng: &mut R) -> Self {
        let root_word = start_words
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| DEFAULT_ROOT.to_string());

        Self::with_root(root_word)
    }

    /// Start a round with a known root word
    ///
    /// Useful for the `check` command and for tests that need a fixed root.
    pub fn with_root(root_word: impl Into<String>) -> Self {
        Self {
            root_word: root_word.into(),
            accepted_words: Vec::new(),
            score: 0,
            pending_input: String::new(),
        }
    }

    /// Record a validated word as accepted
    ///
    /// Prepends `word` to the accepted list (newest first), increments the
    /// score, and clears the pending input. The caller must have already run
    /// the word through [`attempt_submission`](crate::core::attempt_submission);
    /// no validation happens here.
    pub fn record_acceptance(&mut self, word: impl Into<String>) {
        self.accepted_words.insert(0, word.into());
        self.score += 1;
        self.pending_input.clear();
    }

    /// Append a character to the pending input
    pub fn push_input(&mut self, c: char) {
        self.pending_input.push(c);
    }

    /// Remove the last character of the pending input
    pub fn pop_input(&mut self) {
        self.pending_input.pop();
    }

    /// Clear the pending input
    pub fn clear_input(&mut self) {
        self.pending_input.clear();
    }

    /// The root word of this round
    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, newest first
    #[inline]
    #[must_use]
    pub fn accepted_words(&self) -> &[String] {
        &self.accepted_words
    }

    /// The running score
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// The in-progress, not-yet-validated candidate text
    #[inline]
    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word_vec(words: &[&str]) -> Vec<String> {
        words.iter().map(|&w| w.to_string()).collect()
    }

    #[test]
    fn start_picks_root_from_list() {
        let words = word_vec(&["alphabet", "notebook", "silkworm"]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let round = RoundState::start(&words, &mut rng);
            assert!(words.contains(&round.root_word().to_string()));
        }
    }

    #[test]
    fn start_resets_all_fields() {
        let words = word_vec(&["notebook"]);
        let mut rng = StdRng::seed_from_u64(7);

        let mut round = RoundState::start(&words, &mut rng);
        round.record_acceptance("note");
        round.push_input('b');

        let fresh = RoundState::start(&words, &mut rng);
        assert_eq!(fresh.root_word(), "notebook");
        assert!(fresh.accepted_words().is_empty());
        assert_eq!(fresh.score(), 0);
        assert_eq!(fresh.pending_input(), "");
    }

    #[test]
    fn start_empty_list_falls_back_to_default() {
        let mut rng = StdRng::seed_from_u64(7);
        let round = RoundState::start(&[], &mut rng);
        assert_eq!(round.root_word(), DEFAULT_ROOT);
    }

    #[test]
    fn record_acceptance_prepends_newest_first() {
        let mut round = RoundState::with_root("silkworm");
        round.record_acceptance("silk");
        round.record_acceptance("worm");

        assert_eq!(round.accepted_words(), &["worm", "silk"]);
    }

    #[test]
    fn record_acceptance_increments_score() {
        let mut round = RoundState::with_root("silkworm");
        assert_eq!(round.score(), 0);

        round.record_acceptance("silk");
        assert_eq!(round.score(), 1);

        round.record_acceptance("worm");
        assert_eq!(round.score(), 2);
    }

    #[test]
    fn record_acceptance_clears_pending_input() {
        let mut round = RoundState::with_root("silkworm");
        round.push_input('s');
        round.push_input('i');
        round.record_acceptance("silk");

        assert_eq!(round.pending_input(), "");
    }

    #[test]
    fn score_matches_accepted_count() {
        let mut round = RoundState::with_root("silkworm");
        for word in ["silk", "worm", "milk"] {
            round.record_acceptance(word);
            assert_eq!(round.score() as usize, round.accepted_words().len());
        }
    }

    #[test]
    fn input_editing() {
        let mut round = RoundState::with_root("silkworm");
        round.push_input('s');
        round.push_input('i');
        round.push_input('x');
        assert_eq!(round.pending_input(), "six");

        round.pop_input();
        assert_eq!(round.pending_input(), "si");

        round.clear_input();
        assert_eq!(round.pending_input(), "");
    }
}
