//! Rolling bitmask placement state.
//!
//! The three occupied sets are kept aligned with the rank about to be filled:
//! bit `x` of each word answers "is column `x` of the current rank attacked
//! along this line". Placing a queen ORs its bit in and rolls both diagonal
//! words by one rank; unplacing rolls them back and XORs the bit out.
//!
//! A queen on an ascending diagonal (`x + rank` constant) attacks one column
//! further left on every following rank, so that word rolls right. The
//! descending word (`x - rank` constant) rolls left. The ascending word keeps
//! [`ASCENDING_HEADROOM`] spare low bits so that no bit is ever shifted out,
//! which is what makes `unplace` an exact inverse of `place`.

use super::bitboard::ColumnSet;
use super::BoardSize;

/// Spare low bits below column 0 in the ascending word.
pub const ASCENDING_HEADROOM: u32 = 31;

/// Occupied columns and diagonals for the ranks placed so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Occupancy {
    size: BoardSize,
    rank: usize,
    columns: ColumnSet,
    ascending: u64,
    descending: u64,
}

impl Occupancy {
    /// Empty board, positioned at rank 0.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Occupancy {
            size,
            rank: 0,
            columns: ColumnSet::EMPTY,
            ascending: 0,
            descending: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// The rank the next queen goes on; equals the number of queens placed.
    #[inline]
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }

    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rank == self.size.get()
    }

    #[inline]
    #[must_use]
    pub fn columns(&self) -> ColumnSet {
        self.columns
    }

    /// Ascending diagonals aligned with the current rank.
    #[inline]
    #[must_use]
    pub fn ascending(&self) -> ColumnSet {
        ColumnSet((self.ascending >> ASCENDING_HEADROOM) as u32).and(self.size.columns())
    }

    /// Descending diagonals aligned with the current rank.
    #[inline]
    #[must_use]
    pub fn descending(&self) -> ColumnSet {
        ColumnSet(self.descending as u32).and(self.size.columns())
    }

    /// Raw diagonal words, for exact state comparison.
    #[inline]
    #[must_use]
    pub fn raw_diagonals(&self) -> (u64, u64) {
        (self.ascending, self.descending)
    }

    /// Columns of the current rank attacked by any placed queen.
    #[inline]
    #[must_use]
    pub fn unavailable(&self) -> ColumnSet {
        self.columns.or(self.ascending()).or(self.descending())
    }

    /// Columns of the current rank where a queen can go.
    #[inline]
    #[must_use]
    pub fn available(&self) -> ColumnSet {
        self.size.columns().without(self.unavailable())
    }

    #[inline]
    #[must_use]
    pub fn is_safe(&self, column: usize) -> bool {
        column < self.size.get() && !self.unavailable().contains(column)
    }

    /// Put a queen on `column` of the current rank and move to the next rank.
    #[inline]
    pub fn place(&mut self, column: usize) {
        debug_assert!(
            self.rank < self.size.get(),
            "place past the last rank of a {} board",
            self.size
        );
        debug_assert!(
            self.is_safe(column),
            "column {column} is attacked on rank {}",
            self.rank
        );
        let bit = 1u64 << column;
        self.columns = self.columns.with(column);
        self.ascending = (self.ascending | (bit << ASCENDING_HEADROOM)) >> 1;
        self.descending = (self.descending | bit) << 1;
        self.rank += 1;
    }

    /// Remove the queen placed on `column` of the previous rank.
    #[inline]
    pub fn unplace(&mut self, column: usize) {
        debug_assert!(self.rank > 0, "unplace on an empty board");
        debug_assert!(
            self.columns.contains(column),
            "column {column} holds no queen"
        );
        let bit = 1u64 << column;
        self.rank -= 1;
        self.ascending = (self.ascending << 1) ^ (bit << ASCENDING_HEADROOM);
        self.descending = (self.descending >> 1) ^ bit;
        self.columns = self.columns.xor(ColumnSet::single(column));
    }
}
