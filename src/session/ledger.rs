//! The move ledger.
//!
//! ## Shape
//!
//! A persistent vector of [`MoveRecord`]s. Step 0 is always the
//! initial record (empty board, no square), so the ledger is never
//! empty and step numbers equal vector indices.
//!
//! ## Branching
//!
//! Appending after a rewind first truncates everything past the
//! cursor. The abandoned branch is unreachable from this ledger but
//! clones taken before the truncate still see it; `im::Vector` keeps
//! the shared prefix intact.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::MoveRecord;

/// Append-only history of board snapshots, truncatable for branching.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    records: Vector<MoveRecord>,
}

impl Ledger {
    /// Create a ledger holding only the initial record.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vector::unit(MoveRecord::initial()),
        }
    }

    /// Number of records. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Index of the newest record.
    #[must_use]
    pub fn last_step(&self) -> usize {
        self.records.len() - 1
    }

    /// Get the record at a step. Panics if `step` is out of range.
    #[must_use]
    pub fn record(&self, step: usize) -> &MoveRecord {
        &self.records[step]
    }

    /// Append a record and return its step number.
    pub fn append(&mut self, record: MoveRecord) -> usize {
        self.records.push_back(record);
        self.last_step()
    }

    /// Drop every record past `step`, making it the newest.
    ///
    /// A no-op when `step` is already the last. Panics if `step` is
    /// out of range.
    pub fn truncate_to(&mut self, step: usize) {
        assert!(step < self.records.len(), "step out of range");
        self.records.truncate(step + 1);
    }

    /// Iterate records oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> + '_ {
        self.records.iter()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Mark, Square};

    fn record_after(square: Square, mark: Mark) -> MoveRecord {
        let mut board = Board::new();
        board.set(square, mark);
        MoveRecord::new(board, square)
    }

    #[test]
    fn test_new_ledger_holds_initial_record() {
        let ledger = Ledger::new();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.last_step(), 0);
        assert_eq!(ledger.record(0), &MoveRecord::initial());
    }

    #[test]
    fn test_append_returns_step_number() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.append(record_after(Square(0), Mark::X)), 1);
        assert_eq!(ledger.append(record_after(Square(5), Mark::O)), 2);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_truncate_keeps_prefix() {
        let mut ledger = Ledger::new();
        for index in 0..4 {
            ledger.append(record_after(Square(index), Mark::X));
        }
        assert_eq!(ledger.len(), 5);

        ledger.truncate_to(2);
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.record(2).played, Some(Square(1)));
    }

    #[test]
    fn test_truncate_to_last_is_noop() {
        let mut ledger = Ledger::new();
        ledger.append(record_after(Square(0), Mark::X));
        let before = ledger.clone();

        ledger.truncate_to(ledger.last_step());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_truncate_then_append_branches() {
        let mut ledger = Ledger::new();
        for index in 0..4 {
            ledger.append(record_after(Square(index), Mark::X));
        }

        ledger.truncate_to(2);
        let step = ledger.append(record_after(Square(9), Mark::O));
        assert_eq!(step, 3);
        assert_eq!(ledger.len(), 4);
        assert_eq!(ledger.record(3).played, Some(Square(9)));
    }

    #[test]
    fn test_clone_keeps_abandoned_branch() {
        let mut ledger = Ledger::new();
        for index in 0..4 {
            ledger.append(record_after(Square(index), Mark::X));
        }
        let snapshot = ledger.clone();

        ledger.truncate_to(1);
        assert_eq!(ledger.len(), 2);
        assert_eq!(snapshot.len(), 5);
        assert_eq!(snapshot.record(4).played, Some(Square(3)));
    }

    #[test]
    #[should_panic(expected = "step out of range")]
    fn test_truncate_out_of_range_panics() {
        let mut ledger = Ledger::new();
        ledger.truncate_to(1);
    }

    #[test]
    fn test_iter_is_oldest_first() {
        let mut ledger = Ledger::new();
        ledger.append(record_after(Square(7), Mark::X));

        let played: Vec<_> = ledger.iter().map(|r| r.played).collect();
        assert_eq!(played, vec![None, Some(Square(7))]);
    }

    #[test]
    fn test_serialization() {
        let mut ledger = Ledger::new();
        ledger.append(record_after(Square(3), Mark::X));

        let json = serde_json::to_string(&ledger).unwrap();
        let deserialized: Ledger = serde_json::from_str(&json).unwrap();
        assert_eq!(ledger, deserialized);
    }
}
