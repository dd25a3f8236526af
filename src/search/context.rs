//! Owned search state threaded through the engines by exclusive reference.

use crate::board::{BoardSize, ColumnSet, Occupancy, Placement};
use crate::sync::StopFlag;

use super::symmetry::{Seed, SeedClass};
use super::SolutionSink;

/// Placement state, counters and collaborators of one sequential search.
pub struct SearchContext<'a> {
    occupancy: Occupancy,
    placement: Placement,
    solutions: u64,
    nodes: u64,
    stop: StopFlag,
    sink: Option<&'a mut dyn SolutionSink>,
    emit_mirror: bool,
}

impl<'a> SearchContext<'a> {
    #[must_use]
    pub fn new(size: BoardSize, stop: StopFlag, sink: Option<&'a mut dyn SolutionSink>) -> Self {
        SearchContext {
            occupancy: Occupancy::new(size),
            placement: Placement::new(size),
            solutions: 0,
            nodes: 0,
            stop,
            sink,
            emit_mirror: false,
        }
    }

    /// Resume from `seed`. Returns the candidate restriction for its next rank.
    pub fn load(&mut self, seed: &Seed) -> ColumnSet {
        self.occupancy = seed.occupancy;
        self.placement = seed.placement;
        self.emit_mirror = seed.class == SeedClass::Mirrored;
        seed.candidates
    }

    #[inline]
    #[must_use]
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    #[inline]
    #[must_use]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    #[inline]
    #[must_use]
    pub fn solutions(&self) -> u64 {
        self.solutions
    }

    /// Queens placed over the whole search, a node count.
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub fn place(&mut self, column: usize) {
        self.placement.set(self.occupancy.rank(), column);
        self.occupancy.place(column);
        self.nodes += 1;
    }

    #[inline]
    pub fn unplace(&mut self, column: usize) {
        self.occupancy.unplace(column);
        self.placement.truncate(self.occupancy.rank());
    }

    /// Count the current full placement and hand it to the sink.
    #[inline]
    pub fn record_solution(&mut self) {
        debug_assert!(self.occupancy.is_complete());
        self.solutions += 1;
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.on_solution(&self.placement);
            if self.emit_mirror {
                sink.on_solution(&self.placement.mirrored());
            }
        }
    }

    /// Cancellation check, polled on every descent.
    #[inline]
    #[must_use]
    pub fn should_stop(&self) -> bool {
        self.stop.is_stopped()
    }
}
