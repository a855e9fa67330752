//! History records.
//!
//! Each entry in the move ledger is a full board snapshot plus the
//! square that was played to reach it. Step 0 is the empty board and
//! carries no square.

use serde::{Deserialize, Serialize};

use super::board::{Board, Square};

/// One step of game history: the board after the move, and the move itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Board state after this step.
    pub board: Board,
    /// Square played at this step. `None` only for the initial record.
    pub played: Option<Square>,
}

impl MoveRecord {
    /// The start-of-game record: empty board, no move played.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            board: Board::new(),
            played: None,
        }
    }

    /// A record for a played move.
    #[must_use]
    pub const fn new(board: Board, played: Square) -> Self {
        Self {
            board,
            played: Some(played),
        }
    }
}

impl Default for MoveRecord {
    fn default() -> Self {
        Self::initial()
    }
}
