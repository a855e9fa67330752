//! Player marks.
//!
//! Two players, X and O. X always moves first; whose turn it is stays
//! a pure function of the history cursor and is never stored on its own.

use serde::{Deserialize, Serialize};

/// A player's mark. A board cell holds `Option<Mark>` (`None` = empty).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}
