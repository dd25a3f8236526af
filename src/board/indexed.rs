//! Indexed boolean-array board.
//!
//! Marks columns and diagonals by explicit index: ascending diagonal
//! `x + rank`, descending diagonal `x - rank + (N - 1)`. Same contract as
//! [`Occupancy`](super::Occupancy) but recomputes diagonal ids for every
//! square. Used by the reference solver to cross-check the bitmask engines.

use super::{BoardSize, MAX_BOARD_SIZE};

const DIAGONALS: usize = 2 * MAX_BOARD_SIZE - 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedBoard {
    size: BoardSize,
    columns: [bool; MAX_BOARD_SIZE],
    ascending: [bool; DIAGONALS],
    descending: [bool; DIAGONALS],
}

impl IndexedBoard {
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        IndexedBoard {
            size,
            columns: [false; MAX_BOARD_SIZE],
            ascending: [false; DIAGONALS],
            descending: [false; DIAGONALS],
        }
    }

    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    #[inline]
    #[must_use]
    pub fn ascending_id(&self, column: usize, rank: usize) -> usize {
        column + rank
    }

    #[inline]
    #[must_use]
    pub fn descending_id(&self, column: usize, rank: usize) -> usize {
        column + self.size.get() - 1 - rank
    }

    #[must_use]
    pub fn is_safe(&self, column: usize, rank: usize) -> bool {
        !self.columns[column]
            && !self.ascending[self.ascending_id(column, rank)]
            && !self.descending[self.descending_id(column, rank)]
    }

    /// Occupy the square and return the diagonal ids consumed.
    pub fn place(&mut self, column: usize, rank: usize) -> (usize, usize) {
        debug_assert!(self.is_safe(column, rank), "square ({column}, {rank}) is attacked");
        let ids = (
            self.ascending_id(column, rank),
            self.descending_id(column, rank),
        );
        self.columns[column] = true;
        self.ascending[ids.0] = true;
        self.descending[ids.1] = true;
        ids
    }

    /// Release a square given the ids returned by [`place`](Self::place).
    pub fn unplace(&mut self, column: usize, (ascending, descending): (usize, usize)) {
        debug_assert!(self.columns[column], "column {column} holds no queen");
        self.descending[descending] = false;
        self.ascending[ascending] = false;
        self.columns[column] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_ids() {
        let board = IndexedBoard::new(BoardSize::new(8).unwrap());
        assert_eq!(board.ascending_id(3, 2), 5);
        assert_eq!(board.descending_id(3, 2), 8);
        assert_eq!(board.descending_id(0, 7), 0);
        assert_eq!(board.descending_id(7, 0), 14);
    }

    #[test]
    fn test_place_blocks_lines() {
        let mut board = IndexedBoard::new(BoardSize::new(8).unwrap());
        let ids = board.place(3, 0);
        assert!(!board.is_safe(3, 5));
        assert!(!board.is_safe(2, 1));
        assert!(!board.is_safe(4, 1));
        assert!(board.is_safe(5, 1));
        board.unplace(3, ids);
        assert_eq!(board, IndexedBoard::new(BoardSize::new(8).unwrap()));
    }
}
