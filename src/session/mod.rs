//! Session layer: history, cursor, and input handling.
//!
//! A [`GameSession`] owns the move ledger and the cursor into it, and
//! is the only place moves are validated and recorded. Front ends talk
//! to it exclusively through [`Input`] events.

pub mod input;
pub mod ledger;
pub mod state;

pub use input::Input;
pub use ledger::Ledger;
pub use state::{GameSession, MoveError, SortOrder};
