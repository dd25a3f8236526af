//! N-Queens search engines.
//!
//! Features:
//! - Recursive and explicit-stack iterative backtracking with identical
//!   traversal order (lowest column first on every rank)
//! - Mirror symmetry halving of the first rank, odd-board centre included
//! - Fixed-size worker pool over independent seeds
//! - Cooperative cancellation through a shared [`StopFlag`]

mod config;
mod context;
mod error;
pub mod iterative;
pub mod recursive;
pub mod reference;
pub mod smp;
pub mod symmetry;

use std::marker::PhantomData;
use std::time::{Duration, Instant};

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{BoardSize, ColumnSet, Placement};
use crate::sync::StopFlag;
use crate::timer;

pub use config::{Engine, EngineConfig, DEFAULT_THREADS};
pub use context::SearchContext;
pub use error::{ConfigError, SearchError};
pub use iterative::Iterative;
pub use recursive::Recursive;
pub use reference::ReferenceSolver;
pub use smp::ParallelSolver;
pub use symmetry::{Partition, Seed, SeedClass, SeedTally, SymmetryBreakdown};

/// A backtracking strategy that exhausts the subtree below a loaded seed.
pub trait Explore {
    const NAME: &'static str;

    /// Enumerate every completion of the context's current placement whose
    /// next queen is in `candidates`. On return the placement state equals
    /// the state on entry.
    fn explore(ctx: &mut SearchContext<'_>, candidates: ColumnSet) -> SearchStatus;
}

/// Receives every full placement found while recording is enabled.
pub trait SolutionSink {
    fn on_solution(&mut self, placement: &Placement);
}

impl<F: FnMut(&Placement)> SolutionSink for F {
    fn on_solution(&mut self, placement: &Placement) {
        self(placement);
    }
}

/// Sink that keeps every solution in discovery order.
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    pub solutions: Vec<Placement>,
}

impl SolutionSink for CollectingSink {
    fn on_solution(&mut self, placement: &Placement) {
        self.solutions.push(*placement);
    }
}

/// Whether a search ran to exhaustion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchStatus {
    Completed,
    /// Stopped by the cancellation flag; counts are partial
    Interrupted,
}

impl SearchStatus {
    #[must_use]
    pub fn is_complete(self) -> bool {
        self == SearchStatus::Completed
    }

    #[must_use]
    pub fn and(self, other: SearchStatus) -> SearchStatus {
        if self.is_complete() {
            other
        } else {
            self
        }
    }
}

/// Outcome of one `run` of a solver.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SearchReport {
    pub size: BoardSize,
    pub engine: &'static str,
    /// Solutions found by this run, mirror factor applied
    pub solutions: u64,
    pub nodes: u64,
    pub seeds: usize,
    pub status: SearchStatus,
    pub elapsed: Duration,
}

/// Benchmark contract shared by every engine.
///
/// The solution counter only grows across runs until `reset`, which clears
/// counters and the stop flag but keeps the board size. `solve` after
/// `reset` returns the same count as a freshly constructed solver.
pub trait Solver: Send {
    fn board_size(&self) -> BoardSize;

    /// Clear counters, keep the board size.
    fn reset(&mut self);

    /// Solutions counted since construction or the last `reset`.
    fn solutions(&self) -> u64;

    /// Search once, passing every full placement to `sink` if given.
    fn run(&mut self, sink: Option<&mut dyn SolutionSink>) -> Result<SearchReport, SearchError>;

    /// Search once and return the solution counter.
    ///
    /// A run stopped by the cancellation flag or a time limit is an
    /// [`SearchError::Interrupted`] error, never a count.
    fn solve(&mut self) -> Result<u64, SearchError> {
        let report = self.run(None)?;
        if !report.status.is_complete() {
            return Err(SearchError::Interrupted {
                partial: report.solutions,
            });
        }
        Ok(self.solutions())
    }
}

/// Single-threaded solver driving an [`Explore`] engine over the root seeds.
pub struct SequentialSolver<E> {
    size: BoardSize,
    symmetry: bool,
    time_limit: Option<Duration>,
    stop: StopFlag,
    solutions: u64,
    nodes: u64,
    _engine: PhantomData<fn() -> E>,
}

pub type RecursiveSolver = SequentialSolver<Recursive>;
pub type IterativeSolver = SequentialSolver<Iterative>;

impl<E: Explore> SequentialSolver<E> {
    /// Solver with symmetry halving enabled and no time limit.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        SequentialSolver {
            size,
            symmetry: true,
            time_limit: None,
            stop: StopFlag::new(),
            solutions: 0,
            nodes: 0,
            _engine: PhantomData,
        }
    }

    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.board_size)
            .with_symmetry(config.symmetry)
            .with_time_limit(config.time_limit)
    }

    #[must_use]
    pub fn with_symmetry(mut self, symmetry: bool) -> Self {
        self.symmetry = symmetry;
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Share a cancellation flag with the caller.
    #[must_use]
    pub fn with_stop(mut self, stop: StopFlag) -> Self {
        self.stop = stop;
        self
    }

    #[must_use]
    pub fn stop_flag(&self) -> &StopFlag {
        &self.stop
    }

    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Split the board total into its half-board and centre-column parts.
    #[must_use]
    pub fn breakdown(size: BoardSize) -> SymmetryBreakdown {
        let stop = StopFlag::new();
        let mut ctx = SearchContext::new(size, stop, None);
        let mut breakdown = SymmetryBreakdown::default();
        for seed in symmetry::root_seeds(size, true) {
            let before = ctx.solutions();
            let candidates = ctx.load(&seed);
            E::explore(&mut ctx, candidates);
            breakdown.add(&seed, ctx.solutions() - before);
        }
        breakdown
    }
}

impl<E: Explore> Solver for SequentialSolver<E> {
    fn board_size(&self) -> BoardSize {
        self.size
    }

    fn reset(&mut self) {
        self.solutions = 0;
        self.nodes = 0;
        self.stop.reset();
    }

    fn solutions(&self) -> u64 {
        self.solutions
    }

    fn run(&mut self, sink: Option<&mut dyn SolutionSink>) -> Result<SearchReport, SearchError> {
        let start = Instant::now();
        let deadline = timer::arm(self.time_limit, &self.stop)?;
        let seeds = symmetry::plan(self.size, self.symmetry, Partition::FirstRank);

        let mut ctx = SearchContext::new(self.size, self.stop.clone(), sink);
        let mut tally = SeedTally::default();
        let mut status = SearchStatus::Completed;
        let mut searched = 0;
        for seed in &seeds {
            let before = ctx.solutions();
            let candidates = ctx.load(seed);
            status = E::explore(&mut ctx, candidates);
            tally.add(seed.class, ctx.solutions() - before);
            searched += 1;
            if !status.is_complete() {
                break;
            }
        }
        if let Some(deadline) = deadline {
            deadline.cancel();
        }

        let solutions = tally.total();
        self.solutions += solutions;
        self.nodes += ctx.nodes();
        let report = SearchReport {
            size: self.size,
            engine: E::NAME,
            solutions,
            nodes: ctx.nodes(),
            seeds: searched,
            status,
            elapsed: start.elapsed(),
        };
        debug!(
            "{} search of {}: {} solutions, {} nodes, {:?} in {:?}",
            E::NAME,
            self.size,
            report.solutions,
            report.nodes,
            report.status,
            report.elapsed
        );
        Ok(report)
    }
}
