//! Render projection.
//!
//! [`RenderView`] is everything a front end needs to draw one frame,
//! computed from the session in a single pass: the board at the
//! cursor, the status, the squares to highlight, and the history list
//! already ordered and labelled. Front ends hold no game state of
//! their own.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Board, MoveRecord, Square};
use crate::rules::Status;
use crate::session::{GameSession, SortOrder};

/// One line of the history list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Step to jump to when picked.
    pub step: usize,
    /// Human-readable label, with 1-based (row, column) coordinates.
    pub label: String,
    /// Whether the cursor sits on this step.
    pub current: bool,
}

/// A drawable snapshot of the session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenderView {
    /// Board at the cursor.
    pub board: Board,
    /// Status of the position; its `Display` is the status line.
    pub status: Status,
    /// Squares of the winning line, empty while the game is open.
    pub highlights: FxHashSet<Square>,
    /// History entries, ordered per `sort`.
    pub moves: Vec<HistoryEntry>,
    /// Order the entries were listed in.
    pub sort: SortOrder,
}

impl RenderView {
    /// Project a session into drawable form.
    #[must_use]
    pub fn new(session: &GameSession) -> Self {
        let status = session.status();

        let mut highlights = FxHashSet::default();
        if let Status::Won(win) = status {
            highlights.extend(win.line);
        }

        let mut moves: Vec<HistoryEntry> = session
            .ledger()
            .iter()
            .enumerate()
            .map(|(step, record)| HistoryEntry {
                step,
                label: entry_label(step, record),
                current: step == session.cursor(),
            })
            .collect();
        if session.sort() == SortOrder::Descending {
            moves.reverse();
        }

        Self {
            board: session.board(),
            status,
            highlights,
            moves,
            sort: session.sort(),
        }
    }
}

fn entry_label(step: usize, record: &MoveRecord) -> String {
    match record.played {
        None => "Go to game start".to_string(),
        Some(sq) => format!("Go to move #{} ({}, {})", step, sq.row() + 1, sq.col() + 1),
    }
}
