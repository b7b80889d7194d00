//! Authoring rules a puzzle must satisfy before it is shared.
//!
//! Checks run in a fixed order and stop at the first failure: category
//! names, then words, then global uniqueness.

use derive_more::{Display, Error};
use rustc_hash::FxHashSet;

use super::definition::Puzzle;

/// Why a hand-built puzzle cannot be shared.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ValidationError {
    /// A category name is empty or whitespace.
    #[display("category {} must have a name", index + 1)]
    EmptyCategoryName {
        /// Zero-based category position.
        index: usize,
    },

    /// A word is empty or whitespace.
    #[display("category {} word {} must not be empty", category + 1, position + 1)]
    EmptyWord {
        /// Zero-based category position.
        category: usize,
        /// Zero-based word position within the category.
        position: usize,
    },

    /// The same word appears more than once across the puzzle.
    #[display("word {word:?} appears more than once")]
    DuplicateWord {
        /// The repeated word.
        word: String,
    },
}

impl Puzzle {
    /// Validate the puzzle against the authoring rules.
    ///
    /// ```
    /// use red_herring::puzzle::{Puzzle, ValidationError};
    ///
    /// let mut puzzle = Puzzle::default();
    /// puzzle.categories[2].words[1] = "Tiger".into();
    ///
    /// assert_eq!(
    ///     puzzle.validate(),
    ///     Err(ValidationError::DuplicateWord { word: "Tiger".into() })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(index) = self
            .categories
            .iter()
            .position(|c| c.name.trim().is_empty())
        {
            return Err(ValidationError::EmptyCategoryName { index });
        }

        for (category, c) in self.categories.iter().enumerate() {
            if let Some(position) = c.words.iter().position(|w| w.trim().is_empty()) {
                return Err(ValidationError::EmptyWord { category, position });
            }
        }

        let mut seen = FxHashSet::default();
        for (_, word) in self.words() {
            if !seen.insert(word) {
                return Err(ValidationError::DuplicateWord {
                    word: word.to_string(),
                });
            }
        }

        Ok(())
    }
}
