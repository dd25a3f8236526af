//! Column set type and operations.

use std::fmt;

/// A set of board columns packed into a 32-bit word, bit `x` for column `x`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColumnSet(pub u32);

impl ColumnSet {
    pub const EMPTY: ColumnSet = ColumnSet(0);

    /// All columns of a board of `size` columns (`size` ≤ 32)
    #[inline]
    #[must_use]
    pub const fn full(size: usize) -> Self {
        if size >= 32 {
            ColumnSet(u32::MAX)
        } else {
            ColumnSet((1u32 << size) - 1)
        }
    }

    /// Columns `0..limit`
    #[inline]
    #[must_use]
    pub const fn below(limit: usize) -> Self {
        Self::full(limit)
    }

    /// Create a set with a single column
    #[inline]
    #[must_use]
    pub const fn single(column: usize) -> Self {
        ColumnSet(1 << column)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of columns in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, column: usize) -> bool {
        (self.0 >> column) & 1 != 0
    }

    /// Isolate the lowest set column (`v & -v` in two's complement).
    #[inline]
    #[must_use]
    pub const fn lowest(self) -> Self {
        ColumnSet(self.0 & self.0.wrapping_neg())
    }

    /// Index of the lowest set column. Only meaningful on a non-empty set.
    #[inline]
    #[must_use]
    pub const fn first(self) -> usize {
        self.0.trailing_zeros() as usize
    }

    #[inline]
    #[must_use]
    pub const fn with(self, column: usize) -> Self {
        ColumnSet(self.0 | (1 << column))
    }

    #[inline]
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        ColumnSet(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        ColumnSet(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        ColumnSet(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn xor(self, other: Self) -> Self {
        ColumnSet(self.0 ^ other.0)
    }

    /// Reflect the set across the vertical axis of a board of `size` columns
    #[inline]
    #[must_use]
    pub const fn mirrored(self, size: usize) -> Self {
        if size == 0 {
            return Self::EMPTY;
        }
        ColumnSet(self.0.reverse_bits() >> (32 - size))
    }

    /// Iterate over the columns in increasing order
    #[inline]
    #[must_use]
    pub fn iter(self) -> ColumnIter {
        ColumnIter(self)
    }
}

/// Iterator over the columns of a [`ColumnSet`], lowest first.
pub struct ColumnIter(ColumnSet);

impl Iterator for ColumnIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            let column = self.0.first();
            self.0 = self.0.xor(self.0.lowest());
            Some(column)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.len() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for ColumnIter {}

impl IntoIterator for ColumnSet {
    type Item = usize;
    type IntoIter = ColumnIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<usize> for ColumnSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter().fold(ColumnSet::EMPTY, ColumnSet::with)
    }
}

impl fmt::Binary for ColumnSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_masks() {
        assert_eq!(ColumnSet::full(0), ColumnSet::EMPTY);
        assert_eq!(ColumnSet::full(4).0, 0b1111);
        assert_eq!(ColumnSet::full(31).0, 0x7FFF_FFFF);
        assert_eq!(ColumnSet::full(32).0, u32::MAX);
    }

    #[test]
    fn test_lowest_isolates_one_bit() {
        let set = ColumnSet(0b1011_0100);
        assert_eq!(set.lowest().0, 0b100);
        assert_eq!(set.first(), 2);
        assert_eq!(ColumnSet::EMPTY.lowest(), ColumnSet::EMPTY);
    }

    #[test]
    fn test_iter_is_lowest_first() {
        let set: ColumnSet = [5, 0, 3].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 3, 5]);
        assert_eq!(set.iter().len(), 3);
    }

    #[test]
    fn test_mirrored() {
        // columns 0 and 1 on an 8-wide board map to 7 and 6
        assert_eq!(ColumnSet(0b11).mirrored(8).0, 0b1100_0000);
        assert_eq!(ColumnSet::single(2).mirrored(5), ColumnSet::single(2));
        let set = ColumnSet(0b1_0010);
        assert_eq!(set.mirrored(5).mirrored(5), set);
    }

    #[test]
    fn test_contains_and_without() {
        let set = ColumnSet::full(6).without(ColumnSet::single(4));
        assert!(set.contains(3));
        assert!(!set.contains(4));
        assert!(!set.contains(6));
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_binary_format() {
        assert_eq!(format!("{:05b}", ColumnSet(0b101)), "00101");
    }
}
