//! Guesses and their evaluation.
//!
//! A guess is an unordered set of four words. Evaluation classifies it as
//! correct (one unsolved category) or incorrect, and looks for the one-off
//! hint: exactly three words from a single category.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::WORDS_PER_CATEGORY;
use crate::puzzle::{Puzzle, WordIndex};

/// An order-independent set of guessed words.
///
/// Words are stored sorted, so two guesses compare equal whenever they hold
/// the same words.
///
/// ```
/// use red_herring::session::Guess;
///
/// let a = Guess::new(["Apple", "Tiger", "Canada", "Soccer"]);
/// let b = Guess::new(["Soccer", "Canada", "Apple", "Tiger"]);
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guess {
    words: SmallVec<[String; WORDS_PER_CATEGORY]>,
}

impl Guess {
    /// Create a guess from any collection of words.
    pub fn new<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        let mut words: SmallVec<[String; WORDS_PER_CATEGORY]> =
            words.into_iter().map(Into::into).collect();
        words.sort_unstable();
        Self { words }
    }

    /// The words, sorted.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Check if the guess contains a word.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Number of words in the guess.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the guess is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Near miss: three of the guessed words share a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneOff {
    /// Position of the category.
    pub category_index: usize,

    /// Name of the category.
    pub category_name: String,
}

/// Find the first category (in puzzle order) holding exactly three of the
/// given words.
///
/// With four words at most one category can hold exactly three, so the
/// order only matters for unvalidated puzzles.
///
/// ```
/// use red_herring::puzzle::Puzzle;
/// use red_herring::session::find_one_off;
///
/// let puzzle = Puzzle::default();
/// let hint = find_one_off(&puzzle, ["Canada", "Brazil", "Japan", "Golf"]).unwrap();
/// assert_eq!(hint.category_name, "Countries");
///
/// assert!(find_one_off(&puzzle, ["Canada", "Brazil", "Golf", "Tennis"]).is_none());
/// ```
pub fn find_one_off<'a>(
    puzzle: &Puzzle,
    words: impl IntoIterator<Item = &'a str> + Clone,
) -> Option<OneOff> {
    puzzle
        .categories
        .iter()
        .enumerate()
        .find(|(_, category)| category.count_members(words.clone()) == 3)
        .map(|(category_index, category)| OneOff {
            category_index,
            category_name: category.name.clone(),
        })
}

/// Result of evaluating a guess, committed when the session settles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// All four words belong to one unsolved category.
    Correct {
        /// The category that was found.
        category_index: usize,
    },

    /// Anything else.
    Incorrect {
        /// Set when three words share a category.
        one_off: Option<OneOff>,
    },
}

impl Verdict {
    /// Check if the verdict is correct.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct { .. })
    }
}

/// Evaluate a guess against a puzzle.
///
/// `is_solved` reports whether a category index is already solved.
pub fn evaluate(
    puzzle: &Puzzle,
    index: &WordIndex,
    guess: &Guess,
    is_solved: impl Fn(usize) -> bool,
) -> Verdict {
    let mut categories = guess.words().iter().map(|w| index.category_of(w));

    if let Some(Some(first)) = categories.next() {
        let same = categories.all(|c| c == Some(first));
        if same && guess.len() == WORDS_PER_CATEGORY && !is_solved(first) {
            return Verdict::Correct {
                category_index: first,
            };
        }
    }

    Verdict::Incorrect {
        one_off: find_one_off(puzzle, guess.words().iter().map(String::as_str)),
    }
}
