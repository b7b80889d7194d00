//! Game session state machine.
//!
//! ## Key Types
//!
//! - `GameSession`: Selection, submission, scoring and the evaluation lock
//! - `WordTile`: A word on the board with its display order and visibility
//! - `Guess`: An order-independent set of four words
//! - `Verdict` / `OneOff`: Evaluation results
//! - `SessionEvent` / `Submission` / `SettleTicket`: What the host is told
//! - `Phase` / `WordStatus`: Derived display state

pub mod event;
pub mod game;
pub mod guess;
pub mod status;
pub mod tile;

pub use event::{SessionEvent, SettleTicket, Submission};
pub use game::GameSession;
pub use guess::{evaluate, find_one_off, Guess, OneOff, Verdict};
pub use status::{Flash, Phase, WordStatus};
pub use tile::WordTile;
