//! Input events.
//!
//! Everything a front end can do to a game collapses to three events.
//! Front ends translate their own gestures (mouse, keys, taps) into
//! these and feed them to [`GameSession::handle`](super::GameSession::handle).

use serde::{Deserialize, Serialize};

use crate::core::Square;

/// An event from the outside world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    /// A square on the board was picked.
    CellClick(Square),
    /// A history entry was picked; the payload is the step to jump to.
    HistoryClick(usize),
    /// The history sort order was flipped.
    SortToggle,
}
