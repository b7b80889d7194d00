//! Puzzle model: categories, puzzles, word lookup and authoring rules.
//!
//! ## Key Types
//!
//! - `Category`: A name plus exactly four words
//! - `Puzzle`: Four categories, optional title and hidden message
//! - `WordIndex`: Word to category lookup
//! - `ValidationError`: Why an authored puzzle cannot be shared
//!
//! Difficulty colors are not part of the model. They are derived from
//! category position through `GameConfig::difficulty`.

pub mod category;
pub mod definition;
pub mod index;
pub mod validation;

pub use category::Category;
pub use definition::Puzzle;
pub use index::WordIndex;
pub use validation::ValidationError;
