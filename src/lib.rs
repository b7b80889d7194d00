//! # red-herring
//!
//! Engine for a word-grouping puzzle: sixteen words, four hidden categories,
//! guess four at a time.
//!
//! ## Design Principles
//!
//! 1. **The token is the database**: A puzzle travels as a compact,
//!    URL-safe token. Nothing is stored server-side.
//!
//! 2. **Explicit state**: A `GameSession` owns all runtime state and changes
//!    only through its transition methods.
//!
//! 3. **Configuration over convention**: Colors, attempt limit and settle
//!    delay come from `GameConfig`, never from puzzle data.
//!
//! ## Modules
//!
//! - `core`: Configuration, difficulty palette, seedable RNG
//! - `puzzle`: Categories, puzzles, word lookup, authoring validation
//! - `codec`: Token encoding/decoding, links, loading with fallback
//! - `session`: The guess-evaluation state machine
//!
//! ## Example
//!
//! ```
//! use red_herring::codec::{decode, encode};
//! use red_herring::core::GameConfig;
//! use red_herring::puzzle::Puzzle;
//! use red_herring::session::GameSession;
//!
//! let token = encode(&Puzzle::default().with_title("Daily")).unwrap();
//! let puzzle = decode(&token).unwrap();
//!
//! let session = GameSession::new(puzzle, GameConfig::default(), 7);
//! assert_eq!(session.title(), Some("Daily"));
//! ```

pub mod codec;
pub mod core;
pub mod puzzle;
pub mod session;

// Re-export commonly used types
pub use crate::core::{DifficultyTier, GameConfig, GameRng, MAX_ATTEMPTS};

pub use crate::puzzle::{Category, Puzzle, ValidationError, WordIndex};

pub use crate::codec::{
    decode, encode, encode_validated, load_puzzle, AuthoringError, DecodingError,
    EncodingError, LoadedPuzzle,
};

pub use crate::session::{
    Flash, GameSession, Guess, OneOff, Phase, SessionEvent, SettleTicket, Submission,
    Verdict, WordStatus, WordTile,
};
