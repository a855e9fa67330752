//! # tictac-four
//!
//! A 4x4 tic-tac-toe engine with full move history and time travel.
//!
//! ## Design Principles
//!
//! 1. **History Is the State**: The game is a ledger of board snapshots
//!    plus a cursor. Turn order, status, and the board are all derived
//!    from the cursor; nothing is stored twice.
//!
//! 2. **Three Inputs**: Front ends drive the game through exactly three
//!    events (play a square, jump to a step, flip the sort order) and
//!    draw exactly one projection, [`RenderView`].
//!
//! 3. **Pure Rules**: Win detection and status are functions of a board,
//!    with no knowledge of history or front ends.
//!
//! ## Architecture
//!
//! - **Persistent History**: The ledger is an `im` vector, so rewinding
//!   and branching share structure with clones instead of copying.
//!
//! - **Time Travel**: Jumping moves only the cursor. Playing from a
//!   past step truncates the abandoned future and branches from there.
//!
//! ## Modules
//!
//! - `core`: Marks, squares, the board, history records
//! - `rules`: Win lines, the winner scan, status derivation
//! - `session`: The ledger, the cursor, input handling
//! - `view`: The render projection front ends draw from
//! - `ui`: Terminal front end (ratatui)

pub mod core;
pub mod rules;
pub mod session;
pub mod ui;
pub mod view;

// Re-export commonly used types
pub use crate::core::{Board, Mark, MoveRecord, Square, CELLS, SIZE};

pub use crate::rules::{status, winner, Status, Win, LINES, LINE_LEN};

pub use crate::session::{GameSession, Input, Ledger, MoveError, SortOrder};

pub use crate::view::{HistoryEntry, RenderView};
