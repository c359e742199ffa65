//! Candidate line filtering
//!
//! Accepts a line only if, after trimming and lowercasing, it is
//! exactly five ASCII letters. The ASCII restriction is deliberate:
//! accented letters never make it into the list.

/// Required word length.
pub const WORD_LENGTH: usize = 5;

/// Filter that normalizes candidate lines into accepted words.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordFilter;

impl WordFilter {
    pub fn new() -> Self {
        Self
    }

    /// Normalize a candidate line and accept it as a word.
    ///
    /// Returns the lowercased word, or `None` if the line is rejected.
    #[inline]
    pub fn accept(&self, line: &str) -> Option<String> {
        let trimmed = line.trim();

        // Byte length is exact here: every accepted byte is ASCII
        if trimmed.len() != WORD_LENGTH {
            return None;
        }

        if !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }

        Some(trimmed.to_ascii_lowercase())
    }

    /// Check whether a line would be accepted.
    #[inline]
    pub fn matches(&self, line: &str) -> bool {
        self.accept(line).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_five_letter_words() {
        let filter = WordFilter::new();

        assert_eq!(filter.accept("apple"), Some("apple".to_string()));
        assert_eq!(filter.accept("train"), Some("train".to_string()));
    }

    #[test]
    fn test_lowercases_accepted_words() {
        let filter = WordFilter::new();

        assert_eq!(filter.accept("APPLE"), Some("apple".to_string()));
        assert_eq!(filter.accept("BaNjO"), Some("banjo".to_string()));
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let filter = WordFilter::new();

        assert_eq!(filter.accept("  train  "), Some("train".to_string()));
        assert_eq!(filter.accept("train\r"), Some("train".to_string()));
    }

    #[test]
    fn test_rejects_wrong_lengths() {
        let filter = WordFilter::new();

        assert!(!filter.matches("hi"));
        assert!(!filter.matches("toolong"));
        assert!(!filter.matches(""));
        assert!(!filter.matches(" "));
    }

    #[test]
    fn test_rejects_non_letters() {
        let filter = WordFilter::new();

        assert!(!filter.matches("ab12c"));
        assert!(!filter.matches("12345"));
        assert!(!filter.matches("ab cd"));
        assert!(!filter.matches("ab-cd"));
    }

    #[test]
    fn test_rejects_non_ascii_letters() {
        let filter = WordFilter::new();

        // 5 characters, but not 5 ASCII letters
        assert!(!filter.matches("héllo"));
        assert!(!filter.matches("naïve"));
    }
}
