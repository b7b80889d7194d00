//! Puzzle definition: four categories plus optional title and hidden message.

use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::core::{CATEGORY_COUNT, MAX_ATTEMPTS};

/// A complete puzzle.
///
/// Puzzles are immutable once handed to a session. Editing produces a new
/// `Puzzle` (and a new token), never an in-place change to a live game.
///
/// ## Example
///
/// ```
/// use red_herring::puzzle::{Category, Puzzle};
///
/// let puzzle = Puzzle::new([
///     Category::new("Fruits", ["Apple", "Banana", "Orange", "Strawberry"]),
///     Category::new("Animals", ["Elephant", "Tiger", "Giraffe", "Penguin"]),
///     Category::new("Countries", ["Canada", "Brazil", "Japan", "Egypt"]),
///     Category::new("Sports", ["Soccer", "Tennis", "Basketball", "Golf"]),
/// ])
/// .with_title("Warm-up");
///
/// assert_eq!(puzzle.category_of("Tiger"), Some(1));
/// assert_eq!(puzzle.title.as_deref(), Some("Warm-up"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// The four categories, easiest first.
    pub categories: [Category; CATEGORY_COUNT],

    /// Always `MAX_ATTEMPTS` for decoded puzzles.
    pub max_attempts: u32,

    /// Optional title shown above the grid.
    pub title: Option<String>,

    /// Optional message revealed only after winning.
    pub hidden_message: Option<String>,
}

impl Puzzle {
    /// Create a puzzle with no title or hidden message.
    #[must_use]
    pub fn new(categories: [Category; CATEGORY_COUNT]) -> Self {
        Self {
            categories,
            max_attempts: MAX_ATTEMPTS,
            title: None,
            hidden_message: None,
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the hidden message.
    #[must_use]
    pub fn with_hidden_message(mut self, message: impl Into<String>) -> Self {
        self.hidden_message = Some(message.into());
        self
    }

    /// Get a category by position.
    #[must_use]
    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Find the category index a word belongs to.
    #[must_use]
    pub fn category_of(&self, word: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.contains(word))
    }

    /// Iterate over every word with its category index, in category order.
    pub fn words(&self) -> impl Iterator<Item = (usize, &str)> {
        self.categories
            .iter()
            .enumerate()
            .flat_map(|(index, c)| c.words.iter().map(move |w| (index, w.as_str())))
    }
}

impl Default for Puzzle {
    /// The puzzle shipped with the game.
    fn default() -> Self {
        Self::new([
            Category::new("Animals", ["Elephant", "Tiger", "Koala", "Kiwi"]),
            Category::new(
                "Fruits which can be yellow",
                ["Pineapple", "Banana", "Lemon", "Mango"],
            ),
            Category::new("Countries", ["Canada", "Brazil", "Japan", "Egypt"]),
            Category::new("Sports", ["Soccer", "Tennis", "Basketball", "Golf"]),
        ])
    }
}
