//! Board evaluation.
//!
//! ## Winner scan
//!
//! Scans the ten lines in declaration order and reports the first line
//! fully held by one mark. Scan order matters only for boards that
//! could never arise in legal play (two complete lines); legal
//! positions have at most one winner.
//!
//! ## Status
//!
//! Win takes precedence over draw: a full board with a complete line
//! is a win. Draw is only reported when the board is full and no line
//! is complete.

use serde::{Deserialize, Serialize};

use super::lines::{LINE_LEN, LINES};
use crate::core::{Board, Mark, Square};

/// A completed line: who won and which squares did it.
///
/// The squares appear in the line's declaration order, so the
/// anti-diagonal reads bottom-left to top-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    pub mark: Mark,
    pub line: [Square; LINE_LEN],
}

/// Game status derived from a board and the mark to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// A line is complete.
    Won(Win),
    /// Board full, no line complete.
    Draw,
    /// Game still open; this mark moves next.
    Next(Mark),
}

/// Scan for a completed line.
#[must_use]
pub fn winner(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c, d] = line;
        if let Some(mark) = board.get(a) {
            if board.get(b) == Some(mark)
                && board.get(c) == Some(mark)
                && board.get(d) == Some(mark)
            {
                return Some(Win { mark, line });
            }
        }
    }
    None
}

/// Derive the status of a position.
#[must_use]
pub fn status(board: &Board, to_move: Mark) -> Status {
    if let Some(win) = winner(board) {
        Status::Won(win)
    } else if board.is_full() {
        Status::Draw
    } else {
        Status::Next(to_move)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Won(win) => {
                write!(f, "Player {} won @ line [", win.mark)?;
                for (i, sq) in win.line.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", sq.index())?;
                }
                write!(f, "]")
            }
            Status::Draw => write!(f, "Draw, Cats' Game!"),
            Status::Next(mark) => write!(f, "Next player: {}", mark),
        }
    }
}
