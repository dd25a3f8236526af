//! Rank to column record of a full or partial placement.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{BoardSize, MAX_BOARD_SIZE};

/// Queens placed so far, one column per rank starting at rank 0.
///
/// Equality, ordering and hashing only look at the placed ranks.
#[derive(Clone, Copy)]
pub struct Placement {
    size: BoardSize,
    len: u8,
    columns: [u8; MAX_BOARD_SIZE],
}

impl Placement {
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Placement {
            size,
            len: 0,
            columns: [0; MAX_BOARD_SIZE],
        }
    }

    /// Build a placement from explicit columns, one per rank.
    ///
    /// Returns `None` if there are more ranks than the board has or a column
    /// is off the board.
    #[must_use]
    pub fn from_columns(size: BoardSize, columns: &[usize]) -> Option<Self> {
        if columns.len() > size.get() || columns.iter().any(|&c| c >= size.get()) {
            return None;
        }
        let mut placement = Placement::new(size);
        for &column in columns {
            placement.push(column);
        }
        Some(placement)
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.len() == self.size.get()
    }

    #[inline]
    pub fn push(&mut self, column: usize) {
        debug_assert!(self.len() < self.size.get(), "placement already full");
        self.columns[self.len as usize] = column as u8;
        self.len += 1;
    }

    #[inline]
    pub fn pop(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.columns[self.len as usize] as usize)
    }

    /// Overwrite the column of `rank`, truncating anything above it.
    #[inline]
    pub fn set(&mut self, rank: usize, column: usize) {
        debug_assert!(rank <= self.len(), "rank {rank} skips a placement");
        self.columns[rank] = column as u8;
        self.len = rank as u8 + 1;
    }

    #[inline]
    pub fn truncate(&mut self, len: usize) {
        if len < self.len() {
            self.len = len as u8;
        }
    }

    #[inline]
    #[must_use]
    pub fn column(&self, rank: usize) -> Option<usize> {
        (rank < self.len()).then(|| self.columns[rank] as usize)
    }

    pub fn columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.placed().iter().map(|&c| c as usize)
    }

    #[inline]
    fn placed(&self) -> &[u8] {
        &self.columns[..self.len()]
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<usize> {
        self.columns().collect()
    }

    /// Column reversal `x -> N-1-x` on every rank.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mut mirror = *self;
        for rank in 0..self.len() {
            mirror.columns[rank] = self.size.mirror(self.columns[rank] as usize) as u8;
        }
        mirror
    }

    /// Check that no two placed queens share a column or a diagonal.
    /// Independent of the bitmask state, by pairwise comparison.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let columns = self.placed();
        for (r1, &c1) in columns.iter().enumerate() {
            for (r2, &c2) in columns.iter().enumerate().skip(r1 + 1) {
                if c1 == c2 || (c1 as usize).abs_diff(c2 as usize) == r2 - r1 {
                    return false;
                }
            }
        }
        true
    }
}

impl PartialEq for Placement {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.placed() == other.placed()
    }
}

impl Eq for Placement {}

impl Hash for Placement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.placed().hash(state);
    }
}

impl PartialOrd for Placement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic by column choice per rank, the engines' discovery order.
impl Ord for Placement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.size
            .cmp(&other.size)
            .then_with(|| self.placed().cmp(other.placed()))
    }
}

impl fmt::Debug for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Placement")
            .field("size", &self.size.get())
            .field("columns", &self.to_vec())
            .finish()
    }
}

/// Renders one rank per line, `Q` for a queen and `.` for an empty square.
impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size.get();
        for rank in 0..self.len() {
            let queen = self.columns[rank] as usize;
            for column in 0..n {
                let square = if column == queen { 'Q' } else { '.' };
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{square}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Placement {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PlacementRepr {
            size: self.size,
            columns: self.to_vec(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Placement {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = PlacementRepr::deserialize(deserializer)?;
        Placement::from_columns(repr.size, &repr.columns)
            .ok_or_else(|| serde::de::Error::custom("column off the board or too many ranks"))
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct PlacementRepr {
    size: BoardSize,
    columns: Vec<usize>,
}
