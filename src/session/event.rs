//! Session notifications and submission results.
//!
//! The session never renders anything. It reports what happened through
//! these values and the host decides how to show them (toasts, dialogs,
//! animations).

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Something the player should be told about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A guess found a category.
    CategorySolved {
        /// Position of the category.
        category_index: usize,
        /// Its name.
        name: String,
    },

    /// The last category was solved. Terminal.
    Won {
        /// The puzzle's hidden message, now revealed.
        hidden_message: Option<String>,
    },

    /// A guess was wrong and no three words shared a category.
    Incorrect,

    /// A guess was wrong but three words shared a category.
    OneOff {
        /// Position of the category.
        category_index: usize,
        /// Its name.
        category_name: String,
    },

    /// The attempt limit was reached. Emitted once per game; play continues.
    AttemptsExhausted {
        /// Attempts used so far.
        attempts: u32,
        /// The configured limit.
        max_attempts: u32,
    },
}

/// Handle for committing a pending verdict after the settle delay.
///
/// A ticket only applies to the session generation that issued it: after a
/// reset, settling an old ticket does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleTicket {
    pub(crate) generation: u64,
    pub(crate) sequence: u64,
    pub(crate) correct: bool,
    pub(crate) delay: Duration,
}

impl SettleTicket {
    /// How long the host should wait before calling `settle`.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether the pending verdict is correct (for the flash animation).
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.correct
    }
}

/// Outcome of `GameSession::submit_guess`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Not allowed right now: fewer than four words selected, an evaluation
    /// in progress, or the game is already won.
    Rejected,

    /// The same incorrect guess was made before. No attempt was counted and
    /// the session is unlocked again.
    Duplicate,

    /// The verdict is pending. Call `settle` with the ticket after its delay.
    Pending(SettleTicket),
}

impl Submission {
    /// The ticket, if the submission is pending.
    #[must_use]
    pub fn ticket(self) -> Option<SettleTicket> {
        match self {
            Submission::Pending(ticket) => Some(ticket),
            _ => None,
        }
    }
}
