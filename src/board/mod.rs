//! Board representation for the N-Queens search.
//!
//! Uses packed bitmasks for O(1) safety queries and exactly invertible
//! place/unplace, plus an indexed boolean-array board used as a reference.
//!
//! # Example
//! ```
//! use queens_engine::board::{BoardSize, Occupancy};
//!
//! let size: BoardSize = "8".parse().unwrap();
//! let mut occ = Occupancy::new(size);
//! occ.place(0);
//! println!("Rank 1 has {} free columns", occ.available().len());
//! ```

mod bitboard;
mod error;
mod indexed;
mod occupancy;
mod placement;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use bitboard::{ColumnIter, ColumnSet};
pub use error::BoardSizeError;
pub use indexed::IndexedBoard;
pub use occupancy::{Occupancy, ASCENDING_HEADROOM};
pub use placement::Placement;

/// Smallest accepted board. A 1×1 board has exactly one solution.
pub const MIN_BOARD_SIZE: usize = 1;

/// Largest accepted board: columns are packed into a `u32` and the rolled
/// ascending diagonals need 31 bits of headroom in a `u64`.
pub const MAX_BOARD_SIZE: usize = 31;

/// A validated board size N.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "usize", into = "usize"))]
pub struct BoardSize(u8);

impl BoardSize {
    /// Validate a board size, rejecting sizes outside
    /// `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        if size < MIN_BOARD_SIZE {
            return Err(BoardSizeError::TooSmall {
                size,
                min: MIN_BOARD_SIZE,
            });
        }
        if size > MAX_BOARD_SIZE {
            return Err(BoardSizeError::TooLarge {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(BoardSize(size as u8))
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Every column of the board.
    #[inline]
    #[must_use]
    pub const fn columns(self) -> ColumnSet {
        ColumnSet::full(self.0 as usize)
    }

    /// Number of first-rank columns strictly left of the mirror axis.
    #[inline]
    #[must_use]
    pub const fn half(self) -> usize {
        self.get() / 2
    }

    /// The self-mirrored centre column, on odd boards only.
    #[inline]
    #[must_use]
    pub const fn center(self) -> Option<usize> {
        if self.0 % 2 == 1 {
            Some(self.half())
        } else {
            None
        }
    }

    /// Column `column` reflected across the vertical axis.
    #[inline]
    #[must_use]
    pub const fn mirror(self, column: usize) -> usize {
        self.get() - 1 - column
    }
}

/// The classic 8×8 board.
impl Default for BoardSize {
    fn default() -> Self {
        BoardSize(8)
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        BoardSize::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.get()
    }
}

impl FromStr for BoardSize {
    type Err = BoardSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let size = trimmed
            .parse::<usize>()
            .map_err(|_| BoardSizeError::NotANumber {
                input: trimmed.to_string(),
            })?;
        BoardSize::new(size)
    }
}
