//! Word list loading utilities
//!
//! Provides functions to load start-word lists from files or use the
//! embedded constants. A list that cannot be loaded is the game's single
//! unrecoverable startup fault; the error is surfaced to the caller rather
//! than aborting here.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for unusable word lists
#[derive(Debug)]
pub enum WordListError {
    /// The file could not be read
    Io(io::Error),
    /// The file held no usable entries after filtering blanks
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not read word list: {err}"),
            Self::Empty => write!(f, "word list contains no usable entries"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Empty => None,
        }
    }
}

/// Load start words from a newline-delimited file
///
/// Entries are trimmed and lowercased; blank lines (including the trailing
/// artifact of a final newline) are filtered so they can never be drawn as
/// a root word.
///
/// # Errors
///
/// Returns [`WordListError::Io`] if the file cannot be read, or
/// [`WordListError::Empty`] if no usable entries remain after filtering.
///
/// # Examples
/// ```no_run
/// use scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start_words.txt").unwrap();
/// println!("Loaded {} start words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let content = fs::read_to_string(path).map_err(WordListError::Io)?;

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect();

    if words.is_empty() {
        return Err(WordListError::Empty);
    }

    Ok(words)
}

/// Convert an embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use scramble::wordlists::START_WORDS;
/// use scramble::wordlists::loader::start_words_from_slice;
///
/// let words = start_words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn start_words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_list(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_from_file_splits_on_newline() {
        let path = temp_list("scramble_loader_basic.txt", "silkworm\nnotebook\nalphabet\n");
        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(words, ["silkworm", "notebook", "alphabet"]);
    }

    #[test]
    fn load_from_file_filters_blank_lines() {
        let path = temp_list("scramble_loader_blanks.txt", "silkworm\n\n  \nnotebook\n\n");
        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(words, ["silkworm", "notebook"]);
    }

    #[test]
    fn load_from_file_lowercases_entries() {
        let path = temp_list("scramble_loader_case.txt", "Silkworm\nNOTEBOOK\n");
        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(words, ["silkworm", "notebook"]);
    }

    #[test]
    fn load_from_file_missing_is_io_error() {
        let result = load_from_file("/nonexistent/scramble_start_words.txt");
        assert!(matches!(result, Err(WordListError::Io(_))));
    }

    #[test]
    fn load_from_file_whitespace_only_is_empty_error() {
        let path = temp_list("scramble_loader_empty.txt", "\n  \n\t\n");
        let result = load_from_file(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(WordListError::Empty)));
    }

    #[test]
    fn start_words_from_slice_converts_all() {
        let input = &["silkworm", "notebook"];
        let words = start_words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0], "silkworm");
        assert_eq!(words[1], "notebook");
    }

    #[test]
    fn error_display_is_descriptive() {
        assert_eq!(
            WordListError::Empty.to_string(),
            "word list contains no usable entries"
        );

        let io_err = WordListError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(io_err.to_string().contains("could not read word list"));
    }
}
