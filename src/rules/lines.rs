//! Win line geometry.
//!
//! A 4x4 board has ten winning lines: four rows, four columns, and the
//! two diagonals. The table below is the single source of truth for
//! line membership; the evaluator and the view never recompute it.

use crate::core::Square;

/// Number of squares in a winning line.
pub const LINE_LEN: usize = 4;

/// All ten winning lines, in scan order: rows top to bottom, columns
/// left to right, then the two diagonals. The anti-diagonal runs from
/// the bottom-left corner up to the top-right.
pub const LINES: [[Square; LINE_LEN]; 10] = [
    // Rows
    [Square(0), Square(1), Square(2), Square(3)],
    [Square(4), Square(5), Square(6), Square(7)],
    [Square(8), Square(9), Square(10), Square(11)],
    [Square(12), Square(13), Square(14), Square(15)],
    // Columns
    [Square(0), Square(4), Square(8), Square(12)],
    [Square(1), Square(5), Square(9), Square(13)],
    [Square(2), Square(6), Square(10), Square(14)],
    [Square(3), Square(7), Square(11), Square(15)],
    // Diagonals
    [Square(0), Square(5), Square(10), Square(15)],
    [Square(12), Square(9), Square(6), Square(3)],
];
