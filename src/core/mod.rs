//! Core engine types: configuration and RNG.
//!
//! These are puzzle-agnostic. Hosts tune a session via `GameConfig` rather
//! than touching puzzle data.

pub mod config;
pub mod rng;

pub use config::{
    default_palette, DifficultyTier, GameConfig, CATEGORY_COUNT, DEFAULT_SETTLE_DELAY,
    MAX_ATTEMPTS, WORDS_PER_CATEGORY,
};
pub use rng::GameRng;
