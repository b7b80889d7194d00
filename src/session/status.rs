//! Derived display state: session phase and per-word status.
//!
//! Nothing here is stored. Both are pure functions of session state.

use serde::{Deserialize, Serialize};

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Guessing, attempts remain.
    Playing,
    /// The attempt limit is reached. Informational: guessing continues.
    AttemptsExhausted,
    /// Every category is solved. Terminal.
    Won,
}

impl Phase {
    /// Check if the phase is terminal.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Phase::Won
    }
}

/// Flash shown on selected words while a verdict is pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flash {
    /// No evaluation in progress.
    Neutral,
    /// The pending verdict is correct.
    Correct,
    /// The pending verdict is incorrect.
    Incorrect,
}

/// How a word should be drawn.
///
/// Precedence: solved, then selected, then previously incorrect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordStatus {
    /// In a solved category. Drawn in that category's difficulty color.
    Solved {
        /// Position of the category.
        category_index: usize,
    },

    /// Currently selected.
    Selected {
        /// Pending-verdict flash.
        flash: Flash,
        /// Also part of an earlier incorrect guess.
        previously_incorrect: bool,
    },

    /// Part of an earlier incorrect guess.
    PreviouslyIncorrect,

    /// Nothing special.
    Normal,
}

impl WordStatus {
    /// Check if the word can still be clicked.
    #[must_use]
    pub fn is_selectable(self) -> bool {
        !matches!(self, WordStatus::Solved { .. })
    }
}
