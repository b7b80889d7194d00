//! A themed group of exactly four words.

use serde::{Deserialize, Serialize};

use crate::core::WORDS_PER_CATEGORY;

/// A category: a name plus exactly four words.
///
/// Word order is preserved through encoding even though play treats it as
/// irrelevant.
///
/// ```
/// use red_herring::puzzle::Category;
///
/// let fruits = Category::new("Fruits", ["Apple", "Banana", "Orange", "Strawberry"]);
/// assert!(fruits.contains("Banana"));
/// assert!(!fruits.contains("banana"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// Category name, revealed when solved.
    pub name: String,

    /// The four member words.
    pub words: [String; WORDS_PER_CATEGORY],
}

impl Category {
    /// Create a new category.
    pub fn new<S: Into<String>>(name: impl Into<String>, words: [S; WORDS_PER_CATEGORY]) -> Self {
        Self {
            name: name.into(),
            words: words.map(Into::into),
        }
    }

    /// Check if a word belongs to this category (exact match).
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Count how many of the given words belong to this category.
    pub fn count_members<'a>(&self, words: impl IntoIterator<Item = &'a str>) -> usize {
        words.into_iter().filter(|w| self.contains(w)).count()
    }

    /// Comma-separated word list, as shown on a solved row.
    #[must_use]
    pub fn word_list(&self) -> String {
        self.words.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_new() {
        let category = Category::new("Sports", ["Soccer", "Tennis", "Basketball", "Golf"]);

        assert_eq!(category.name, "Sports");
        assert_eq!(category.words[0], "Soccer");
        assert_eq!(category.words[3], "Golf");
    }

    #[test]
    fn test_count_members() {
        let category = Category::new("Fruits", ["Apple", "Banana", "Orange", "Strawberry"]);

        assert_eq!(category.count_members(["Apple", "Banana", "Tiger"]), 2);
        assert_eq!(category.count_members(["Canada"]), 0);
    }

    #[test]
    fn test_word_list() {
        let category = Category::new("Countries", ["Canada", "Brazil", "Japan", "Egypt"]);
        assert_eq!(category.word_list(), "Canada, Brazil, Japan, Egypt");
    }
}
