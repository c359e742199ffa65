//! Deduplicated, sorted word collection

use ahash::RandomState;
use hashbrown::HashSet;

/// The final wordlist: unique entries in ascending lexicographic
/// order, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSet {
    words: Vec<String>,
}

impl WordSet {
    /// Build the set from accepted words, dropping duplicates and
    /// sorting.
    pub fn from_words(words: Vec<String>) -> Self {
        let mut seen: HashSet<String, RandomState> =
            HashSet::with_capacity_and_hasher(words.len(), RandomState::new());
        let mut unique = Vec::with_capacity(words.len());

        for word in words {
            if seen.insert(word.clone()) {
                unique.push(word);
            }
        }

        unique.sort_unstable();

        Self { words: unique }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
