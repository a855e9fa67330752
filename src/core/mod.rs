//! Core game types: marks, the board, and history records.
//!
//! This module contains the plain data the rest of the crate is built
//! on. Rules live in `rules`, session bookkeeping in `session`.

pub mod board;
pub mod mark;
pub mod record;

pub use board::{Board, Square, CELLS, SIZE};
pub use mark::Mark;
pub use record::MoveRecord;
