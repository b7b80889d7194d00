//! Game configuration types.
//!
//! Hosts configure a session at startup by providing:
//! - `DifficultyTier`: Label and color for one category slot
//! - `GameConfig`: Attempt limit, settle delay and the difficulty palette
//!
//! Puzzles never carry colors or labels. A category's difficulty is its
//! position (0..4) looked up in the palette.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Number of categories in every puzzle.
pub const CATEGORY_COUNT: usize = 4;

/// Number of words in every category.
pub const WORDS_PER_CATEGORY: usize = 4;

/// Attempt limit recorded in every decoded puzzle.
pub const MAX_ATTEMPTS: u32 = 4;

/// Default pause between submitting a guess and committing its verdict.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(600);

/// Presentation data for one category position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTier {
    /// Human-readable label, e.g. "Yellow (Easy)".
    pub label: String,

    /// Color identifier handed to the renderer (opaque to the engine).
    pub color: String,
}

impl DifficultyTier {
    /// Create a new tier.
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// The standard yellow/green/blue/purple palette, easiest first.
#[must_use]
pub fn default_palette() -> [DifficultyTier; CATEGORY_COUNT] {
    [
        DifficultyTier::new("Yellow (Easy)", "yellow"),
        DifficultyTier::new("Green (Medium)", "green"),
        DifficultyTier::new("Blue (Medium)", "blue"),
        DifficultyTier::new("Purple (Hard)", "purple"),
    ]
}

/// Complete session configuration.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use red_herring::core::GameConfig;
///
/// let config = GameConfig::new()
///     .with_max_attempts(6)
///     .with_settle_delay(Duration::ZERO);
///
/// assert_eq!(config.max_attempts, 6);
/// assert_eq!(config.difficulty(3).label, "Purple (Hard)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Incorrect guesses before the exhausted-attempts notice is shown.
    ///
    /// Reaching the limit never ends the game.
    pub max_attempts: u32,

    /// Pause the host waits between `submit_guess` and `settle`.
    pub settle_delay: Duration,

    /// Difficulty tier per category position.
    pub palette: [DifficultyTier; CATEGORY_COUNT],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            settle_delay: DEFAULT_SETTLE_DELAY,
            palette: default_palette(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the attempt limit.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set the settle delay.
    #[must_use]
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Replace the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: [DifficultyTier; CATEGORY_COUNT]) -> Self {
        self.palette = palette;
        self
    }

    /// Get the tier for a category position.
    ///
    /// Positions wrap around the palette, so any index yields a tier.
    #[must_use]
    pub fn difficulty(&self, category_index: usize) -> &DifficultyTier {
        &self.palette[category_index % CATEGORY_COUNT]
    }
}
