//! The compact JSON record carried inside a token.
//!
//! ```text
//! {"c":[["Fruits","Apple","Banana","Orange","Strawberry"], ...],"t":"Title","m":"Message"}
//! ```
//!
//! `t` and `m` are omitted when absent. Colors and the attempt limit are
//! never written.

use serde::{Deserialize, Serialize};

use super::error::DecodingError;
use crate::core::{CATEGORY_COUNT, WORDS_PER_CATEGORY};
use crate::puzzle::{Category, Puzzle};

/// Strings per category tuple: the name followed by the words.
pub const TUPLE_ARITY: usize = 1 + WORDS_PER_CATEGORY;

/// Wire shape of a puzzle.
///
/// Category tuples are kept as plain vectors so arity is checked explicitly
/// instead of surfacing as a generic JSON error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactPuzzle {
    /// `[name, word1, word2, word3, word4]` per category.
    pub c: Vec<Vec<String>>,

    /// Title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<String>,

    /// Hidden message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m: Option<String>,
}

impl From<&Puzzle> for CompactPuzzle {
    fn from(puzzle: &Puzzle) -> Self {
        let c: Vec<Vec<String>> = puzzle
            .categories
            .iter()
            .map(|category| {
                std::iter::once(&category.name)
                    .chain(category.words.iter())
                    .cloned()
                    .collect::<Vec<String>>()
            })
            .collect();

        Self {
            c,
            t: puzzle.title.clone(),
            m: puzzle.hidden_message.clone(),
        }
    }
}

impl TryFrom<CompactPuzzle> for Puzzle {
    type Error = DecodingError;

    /// Rebuild a full puzzle. The attempt limit is always the fixed constant.
    fn try_from(compact: CompactPuzzle) -> Result<Self, Self::Error> {
        let found = compact.c.len();
        if found != CATEGORY_COUNT {
            return Err(DecodingError::CategoryCount { found });
        }

        let categories: Vec<Category> = compact
            .c
            .into_iter()
            .enumerate()
            .map(|(index, tuple)| category_from_tuple(index, tuple))
            .collect::<Result<_, _>>()?;

        let categories: [Category; CATEGORY_COUNT] = categories
            .try_into()
            .map_err(|_| DecodingError::CategoryCount { found })?;

        let mut puzzle = Puzzle::new(categories);
        puzzle.title = compact.t;
        puzzle.hidden_message = compact.m;
        Ok(puzzle)
    }
}

fn category_from_tuple(index: usize, tuple: Vec<String>) -> Result<Category, DecodingError> {
    let found = tuple.len();
    let arity = || DecodingError::CategoryArity { index, found };
    if found != TUPLE_ARITY {
        return Err(arity());
    }

    let mut fields = tuple.into_iter();
    let name = fields.next().ok_or_else(arity)?;
    let words: [String; WORDS_PER_CATEGORY] = fields
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|_| arity())?;

    Ok(Category { name, words })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_from_puzzle() {
        let compact = CompactPuzzle::from(&Puzzle::default().with_title("T"));

        assert_eq!(compact.c.len(), 4);
        assert_eq!(
            compact.c[3],
            vec!["Sports", "Soccer", "Tennis", "Basketball", "Golf"]
        );
        assert_eq!(compact.t.as_deref(), Some("T"));
        assert!(compact.m.is_none());
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let json = serde_json::to_string(&CompactPuzzle::from(&Puzzle::default())).unwrap();

        assert!(json.starts_with(r#"{"c":[["Animals","Elephant""#));
        assert!(!json.contains("\"t\""));
        assert!(!json.contains("\"m\""));
    }

    #[test]
    fn test_wrong_category_count() {
        let mut compact = CompactPuzzle::from(&Puzzle::default());
        compact.c.pop();

        let err = Puzzle::try_from(compact).unwrap_err();
        assert!(matches!(err, DecodingError::CategoryCount { found: 3 }));
    }

    #[test]
    fn test_wrong_arity() {
        let mut compact = CompactPuzzle::from(&Puzzle::default());
        compact.c[2].push("Peru".into());

        let err = Puzzle::try_from(compact).unwrap_err();
        assert!(matches!(
            err,
            DecodingError::CategoryArity { index: 2, found: 6 }
        ));
    }

    #[test]
    fn test_null_title_is_absent() {
        let compact: CompactPuzzle = serde_json::from_str(
            r#"{"c":[["a","1","2","3","4"],["b","5","6","7","8"],["c","9","10","11","12"],["d","13","14","15","16"]],"t":null}"#,
        )
        .unwrap();

        let puzzle = Puzzle::try_from(compact).unwrap();
        assert!(puzzle.title.is_none());
        assert_eq!(puzzle.categories[2].words[0], "9");
    }
}
