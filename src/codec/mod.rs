//! Puzzle codec: lossless, compact, URL-embeddable puzzle tokens.
//!
//! ## Key Types
//!
//! - `CompactPuzzle`: The JSON record inside a token
//! - `encode` / `decode`: Puzzle to token and back
//! - `DecodingError` / `EncodingError`: Codec failures
//! - `link`: Play/edit URLs and the loader with default-puzzle fallback
//!
//! The codec is pure. It has no dependency on the game session.

pub mod compact;
pub mod error;
pub mod link;
pub mod token;

pub use compact::CompactPuzzle;
pub use error::{AuthoringError, DecodingError, EncodingError};
pub use link::{load_puzzle, LoadedPuzzle};
pub use token::{decode, encode, encode_validated};
