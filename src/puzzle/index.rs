//! Word lookup for a loaded puzzle.
//!
//! The `WordIndex` maps every word to its category position so a session can
//! classify selections without scanning all categories.

use rustc_hash::FxHashMap;

use super::definition::Puzzle;

/// Map from word to category index.
///
/// ```
/// use red_herring::puzzle::{Puzzle, WordIndex};
///
/// let index = WordIndex::new(&Puzzle::default());
/// assert_eq!(index.category_of("Koala"), Some(0));
/// assert_eq!(index.len(), 16);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordIndex {
    words: FxHashMap<String, usize>,
}

impl WordIndex {
    /// Build the index for a puzzle.
    ///
    /// If a word repeats (only possible for unvalidated puzzles), the first
    /// category containing it wins.
    #[must_use]
    pub fn new(puzzle: &Puzzle) -> Self {
        let mut words = FxHashMap::default();
        for (category_index, word) in puzzle.words() {
            words.entry(word.to_string()).or_insert(category_index);
        }
        Self { words }
    }

    /// Get the category index of a word.
    #[must_use]
    pub fn category_of(&self, word: &str) -> Option<usize> {
        self.words.get(word).copied()
    }

    /// Check if a word is part of the puzzle.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
