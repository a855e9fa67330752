//! Win rules.
//!
//! Pure functions over [`Board`](crate::core::Board):
//! - The line table (`lines`)
//! - The winner scan and status derivation (`evaluator`)
//!
//! Nothing here touches history or turn order; the session layer owns
//! those and feeds the evaluator the mark to move.

pub mod evaluator;
pub mod lines;

pub use evaluator::{status, winner, Status, Win};
pub use lines::{LINES, LINE_LEN};
