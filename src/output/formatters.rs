//! Formatting utilities for terminal output

/// Annotate a word with its letter count, e.g. `silk (4)`
#[must_use]
pub fn length_badge(word: &str) -> String {
    format!("{} ({})", word, word.chars().count())
}

/// Mark for a rule verdict line
#[must_use]
pub const fn verdict_mark(pass: bool) -> &'static str {
    if pass { "✓" } else { "✗" }
}

/// Horizontal section rule
#[must_use]
pub fn section_rule(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_badge_counts_letters() {
        assert_eq!(length_badge("silk"), "silk (4)");
        assert_eq!(length_badge("ow"), "ow (2)");
    }

    #[test]
    fn verdict_marks() {
        assert_eq!(verdict_mark(true), "✓");
        assert_eq!(verdict_mark(false), "✗");
    }

    #[test]
    fn section_rule_width() {
        assert_eq!(section_rule(3), "───");
        assert_eq!(section_rule(0), "");
    }
}
