//! Mirror symmetry reduction and seed partitioning.
//!
//! Every solution with its first-rank queen in column `x` has a mirror image
//! with the first-rank queen in column `N-1-x`, so only the left half of the
//! first rank is searched and the count doubled.
//!
//! On odd boards the centre column is its own mirror. Its solutions still
//! come in mirror pairs one rank deeper: with the first queen in the centre,
//! the rank-1 queen is strictly left or strictly right of it. The centre
//! seed therefore restricts rank 1 to the columns left of the centre (the
//! column directly left is attacked diagonally and drops out by itself) and
//! is doubled like the other seeds.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{BoardSize, ColumnSet, Occupancy, Placement};

/// How a seed's count contributes to the board total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SeedClass {
    /// The mirror image of this subtree is not searched: counted twice
    Mirrored,
    /// Counted once: the subtree is its own mirror or symmetry is off
    Unique,
}

/// Root granularity handed to the search engines and worker pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Partition {
    /// One seed per first-rank column
    #[default]
    FirstRank,
    /// One seed per valid first-two-ranks prefix
    FirstTwoRanks,
}

impl Partition {
    #[must_use]
    pub fn ranks(self) -> usize {
        match self {
            Partition::FirstRank => 1,
            Partition::FirstTwoRanks => 2,
        }
    }
}

/// Self-contained root state for an independent subtree search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seed {
    pub occupancy: Occupancy,
    pub placement: Placement,
    /// Columns allowed on the next rank, before attack filtering
    pub candidates: ColumnSet,
    pub class: SeedClass,
}

impl Seed {
    /// The empty board: every column allowed on rank 0.
    #[must_use]
    pub fn root(size: BoardSize) -> Self {
        Seed {
            occupancy: Occupancy::new(size),
            placement: Placement::new(size),
            candidates: size.columns(),
            class: SeedClass::Unique,
        }
    }

    /// Column of the first-rank queen, if one is placed.
    #[must_use]
    pub fn first_column(&self) -> Option<usize> {
        self.placement.column(0)
    }

    /// Child seed with a queen on `column` of the next rank.
    #[must_use]
    pub fn child(&self, column: usize, candidates: ColumnSet) -> Self {
        let mut child = *self;
        child.occupancy.place(column);
        child.placement.push(column);
        child.candidates = candidates;
        child
    }

    /// One child per safe candidate of the next rank. A complete seed has
    /// nothing left to expand and is returned as is.
    #[must_use]
    pub fn expand(&self) -> Vec<Seed> {
        if self.occupancy.is_complete() {
            return vec![*self];
        }
        let full = self.occupancy.size().columns();
        self.candidates
            .and(self.occupancy.available())
            .iter()
            .map(|column| self.child(column, full))
            .collect()
    }
}

/// Seeds for the first rank.
///
/// With symmetry, the left half columns plus the centre column on odd
/// boards, all [`SeedClass::Mirrored`]. The 1×1 board is a single complete
/// [`SeedClass::Unique`] seed. Without symmetry, the empty board.
#[must_use]
pub fn root_seeds(size: BoardSize, symmetry: bool) -> Vec<Seed> {
    let root = Seed::root(size);
    if !symmetry {
        return vec![root];
    }
    let n = size.get();
    if n == 1 {
        return vec![root.child(0, ColumnSet::EMPTY)];
    }

    let full = size.columns();
    let mut seeds: Vec<Seed> = (0..size.half())
        .map(|column| Seed {
            class: SeedClass::Mirrored,
            ..root.child(column, full)
        })
        .collect();

    if let Some(center) = size.center() {
        seeds.push(Seed {
            class: SeedClass::Mirrored,
            ..root.child(center, ColumnSet::below(center))
        });
    }
    seeds
}

/// Seeds at the depth requested by `partition`.
#[must_use]
pub fn plan(size: BoardSize, symmetry: bool, partition: Partition) -> Vec<Seed> {
    let mut seeds = root_seeds(size, symmetry);
    // without symmetry the root sits one rank above the symmetric seeds
    let expansions = partition.ranks() - usize::from(symmetry);
    for _ in 0..expansions {
        seeds = seeds.iter().flat_map(Seed::expand).collect();
    }
    seeds
}

/// Per-class solution sums. The ×2 mirror factor is applied once, here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeedTally {
    pub mirrored: u64,
    pub unique: u64,
}

impl SeedTally {
    #[inline]
    pub fn add(&mut self, class: SeedClass, solutions: u64) {
        match class {
            SeedClass::Mirrored => self.mirrored += solutions,
            SeedClass::Unique => self.unique += solutions,
        }
    }

    #[inline]
    pub fn merge(&mut self, other: SeedTally) {
        self.mirrored += other.mirrored;
        self.unique += other.unique;
    }

    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        2 * self.mirrored + self.unique
    }
}

/// Decomposition `total = 2 * half + centre` of a symmetric count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SymmetryBreakdown {
    /// Solutions with the first queen strictly left of the mirror axis
    pub half: u64,
    /// Solutions with the first queen on the centre column (odd boards)
    pub center: u64,
}

impl SymmetryBreakdown {
    #[must_use]
    pub fn total(&self) -> u64 {
        2 * self.half + self.center
    }

    /// Account for a symmetric seed's raw subtree count.
    pub fn add(&mut self, seed: &Seed, solutions: u64) {
        let size = seed.occupancy.size();
        let on_center = seed.first_column().is_some() && seed.first_column() == size.center();
        match (on_center, seed.class) {
            (true, SeedClass::Mirrored) => self.center += 2 * solutions,
            (true, SeedClass::Unique) => self.center += solutions,
            (false, SeedClass::Mirrored) => self.half += solutions,
            // only reachable with symmetry off, where the split is meaningless
            (false, SeedClass::Unique) => self.half += solutions,
        }
    }
}
