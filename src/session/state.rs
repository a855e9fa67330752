//! Game session state.
//!
//! ## Cursor and turn order
//!
//! The session is a [`Ledger`] plus a cursor into it. Whose turn it is
//! is never stored: X moves on even cursors, O on odd ones, so turn
//! order stays correct across any sequence of jumps and branches.
//!
//! ## Branching
//!
//! Playing a move while the cursor sits behind the newest record first
//! truncates the ledger to the cursor, then appends. The abandoned
//! future is gone; step numbers continue from the cursor.
//!
//! ## Rejection
//!
//! A move is checked against the board at the cursor: first for a
//! finished game, then for an occupied square. Rejected moves leave
//! the session untouched.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::input::Input;
use super::ledger::Ledger;
use crate::core::{Board, Mark, MoveRecord, Square, CELLS};
use crate::rules::{self, Status};

/// Display order for the history list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Get the opposite order.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveError {
    /// The board at the cursor already has a winner.
    GameOver,
    /// The square already holds a mark.
    SquareTaken,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "the game is already over"),
            MoveError::SquareTaken => write!(f, "that square is already taken"),
        }
    }
}

impl std::error::Error for MoveError {}

/// A full game: history, cursor, and history display order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    ledger: Ledger,
    cursor: usize,
    sort: SortOrder,
}

impl GameSession {
    /// Start a fresh game at step 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ledger: Ledger::new(),
            cursor: 0,
            sort: SortOrder::default(),
        }
    }

    /// The step currently being viewed.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The full move history.
    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Current history display order.
    #[must_use]
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// The board at the cursor.
    #[must_use]
    pub fn board(&self) -> Board {
        self.ledger.record(self.cursor).board
    }

    /// The mark that moves next from the cursor's position.
    #[must_use]
    pub fn active_mark(&self) -> Mark {
        if self.cursor % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Status of the position at the cursor.
    #[must_use]
    pub fn status(&self) -> Status {
        rules::status(&self.board(), self.active_mark())
    }

    /// Squares playable from the cursor's position. Empty once the
    /// game is won.
    #[must_use]
    pub fn legal_moves(&self) -> SmallVec<[Square; CELLS]> {
        let board = self.board();
        if rules::winner(&board).is_some() {
            return SmallVec::new();
        }
        board.empty_squares()
    }

    /// Play the active mark on a square.
    ///
    /// On success the ledger is truncated to the cursor, the new
    /// record appended, and the cursor moved onto it. On rejection
    /// nothing changes.
    pub fn apply_move(&mut self, square: Square) -> Result<(), MoveError> {
        let board = self.board();
        if rules::winner(&board).is_some() {
            log::debug!("move on {square} rejected: game over");
            return Err(MoveError::GameOver);
        }
        if board.get(square).is_some() {
            log::debug!("move on {square} rejected: square taken");
            return Err(MoveError::SquareTaken);
        }

        let mark = self.active_mark();
        let mut next = board;
        next.set(square, mark);

        self.ledger.truncate_to(self.cursor);
        self.cursor = self.ledger.append(MoveRecord::new(next, square));
        log::debug!("{mark} plays {square}, now at step {}", self.cursor);

        let status = self.status();
        if !matches!(status, Status::Next(_)) {
            log::info!("game over: {status}");
        }
        Ok(())
    }

    /// Move the cursor to a recorded step. Panics if `step` is out of
    /// range.
    pub fn jump_to(&mut self, step: usize) {
        assert!(step < self.ledger.len(), "step out of range");
        self.cursor = step;
        log::debug!("jumped to step {step}");
    }

    /// Flip the history display order.
    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggled();
        log::debug!("history order: {:?}", self.sort);
    }

    /// Feed one input event to the session.
    pub fn handle(&mut self, input: Input) -> Result<(), MoveError> {
        match input {
            Input::CellClick(square) => self.apply_move(square),
            Input::HistoryClick(step) => {
                self.jump_to(step);
                Ok(())
            }
            Input::SortToggle => {
                self.toggle_sort();
                Ok(())
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
