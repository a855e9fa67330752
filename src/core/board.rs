//! The 4x4 board.
//!
//! ## Square
//!
//! Newtype over a row-major cell index: `index = row * 4 + col`, with
//! row and col in `[0, 4)`. Both constructors assert their range; a
//! raw out-of-range literal fails at first use the way slice indexing
//! does.
//!
//! ## Board
//!
//! Fixed array of 16 cells, each `Option<Mark>`. The board is plain
//! data: occupancy and win rules are enforced by the session layer,
//! not here.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::mark::Mark;

/// Side length of the board.
pub const SIZE: usize = 4;

/// Total number of cells.
pub const CELLS: usize = SIZE * SIZE;

/// A board position, stored as a row-major cell index.
///
/// ```
/// use tictac_four::core::Square;
///
/// let sq = Square::from_coords(2, 1);
/// assert_eq!(sq.index(), 9);
/// assert_eq!((sq.row(), sq.col()), (2, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square(pub u8);

impl Square {
    /// Create a square from a raw cell index. Panics if out of range.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < CELLS, "cell index out of range");
        Self(index)
    }

    /// Create a square from (row, col) coordinates.
    #[must_use]
    pub const fn from_coords(row: usize, col: usize) -> Self {
        assert!(row < SIZE && col < SIZE, "coordinates out of range");
        Self((row * SIZE + col) as u8)
    }

    /// Get the raw cell index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the row (0-3).
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / SIZE
    }

    /// Get the column (0-3).
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 as usize % SIZE
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

/// The 16-cell board.
///
/// ```
/// use tictac_four::{Board, Mark, Square};
///
/// let mut board = Board::new();
/// board.set(Square(5), Mark::X);
/// assert_eq!(board.get(Square(5)), Some(Mark::X));
/// assert_eq!(board.get(Square(6)), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELLS],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELLS],
        }
    }

    /// Get the mark at a square, if any.
    #[must_use]
    pub fn get(&self, square: Square) -> Option<Mark> {
        self.cells[square.index()]
    }

    /// Place a mark on a square, overwriting whatever was there.
    pub fn set(&mut self, square: Square, mark: Mark) {
        self.cells[square.index()] = Some(mark);
    }

    /// Check whether every cell holds a mark.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Collect the squares that hold no mark, in index order.
    #[must_use]
    pub fn empty_squares(&self) -> SmallVec<[Square; CELLS]> {
        (0..CELLS as u8)
            .map(Square)
            .filter(|&sq| self.get(sq).is_none())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIZE {
            if row > 0 {
                writeln!(f, "---+---+---+---")?;
            }
            for col in 0..SIZE {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[row * SIZE + col] {
                    Some(mark) => write!(f, " {} ", mark)?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_coords() {
        assert_eq!(Square::from_coords(0, 0), Square(0));
        assert_eq!(Square::from_coords(0, 3), Square(3));
        assert_eq!(Square::from_coords(3, 0), Square(12));
        assert_eq!(Square::from_coords(3, 3), Square(15));
    }

    #[test]
    fn test_square_roundtrip() {
        for index in 0..CELLS as u8 {
            let sq = Square::new(index);
            assert_eq!(Square::from_coords(sq.row(), sq.col()), sq);
        }
    }

    #[test]
    #[should_panic(expected = "coordinates out of range")]
    fn test_square_coords_out_of_range() {
        Square::from_coords(4, 0);
    }

    #[test]
    #[should_panic(expected = "cell index out of range")]
    fn test_square_index_out_of_range() {
        Square::new(16);
    }

    #[test]
    fn test_square_display() {
        assert_eq!(format!("{}", Square(9)), "(2, 1)");
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for index in 0..CELLS as u8 {
            assert_eq!(board.get(Square(index)), None);
        }
        assert!(!board.is_full());
        assert_eq!(board.empty_squares().len(), CELLS);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        board.set(Square(0), Mark::X);
        board.set(Square(15), Mark::O);

        assert_eq!(board.get(Square(0)), Some(Mark::X));
        assert_eq!(board.get(Square(15)), Some(Mark::O));
        assert_eq!(board.get(Square(7)), None);
        assert_eq!(board.empty_squares().len(), CELLS - 2);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for index in 0..CELLS as u8 {
            board.set(Square(index), Mark::X);
        }
        assert!(board.is_full());
        assert!(board.empty_squares().is_empty());
    }

    #[test]
    fn test_empty_squares_in_index_order() {
        let mut board = Board::new();
        board.set(Square(1), Mark::X);
        board.set(Square(3), Mark::O);

        let empties = board.empty_squares();
        assert_eq!(empties[0], Square(0));
        assert_eq!(empties[1], Square(2));
        assert_eq!(empties[2], Square(4));
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new();
        board.set(Square(0), Mark::X);
        board.set(Square(5), Mark::O);

        let grid = format!("{}", board);
        assert!(grid.starts_with(" X |"));
        assert!(grid.contains("| O |"));
        assert_eq!(grid.lines().count(), 7); // 4 rows + 3 separators
    }

    #[test]
    fn test_serialization() {
        let mut board = Board::new();
        board.set(Square(4), Mark::O);

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
