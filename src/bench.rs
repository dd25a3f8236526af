//! Repeated-run timing harness.
//!
//! Each run resets the solver, times one `solve`, and checks the count
//! against the oracle. The fastest and slowest fifth of the runs are
//! discarded and the rest averaged.

use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, info};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::board::BoardSize;
use crate::oracle;
use crate::search::{SearchError, Solver};

/// Runs per benchmark when none are requested
pub const DEFAULT_RUNS: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BenchmarkReport {
    pub size: BoardSize,
    pub runs: usize,
    /// Runs dropped from each end of the sorted timings
    pub excluded: usize,
    pub solutions: u64,
    pub trimmed_mean: Duration,
    pub fastest: Duration,
    pub slowest: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchmarkError {
    /// Zero runs requested
    NoRuns,
    /// A run disagreed with the known count
    InvalidSolutions { size: usize, found: u64, expected: u64 },
    /// A run failed or was stopped before exhausting the board
    Search(SearchError),
}

impl fmt::Display for BenchmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchmarkError::NoRuns => write!(f, "Benchmark needs at least 1 run"),
            BenchmarkError::InvalidSolutions {
                size,
                found,
                expected,
            } => write!(
                f,
                "Invalid solution count for {size}x{size}: found {found}, expected {expected}"
            ),
            BenchmarkError::Search(err) => write!(f, "Search failed: {err}"),
        }
    }
}

impl std::error::Error for BenchmarkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchmarkError::Search(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SearchError> for BenchmarkError {
    fn from(err: SearchError) -> Self {
        BenchmarkError::Search(err)
    }
}

/// Mean of `timings` after dropping `len / 5` from each end. Sorts in place.
#[must_use]
pub fn trimmed_mean(timings: &mut [Duration]) -> Option<Duration> {
    if timings.is_empty() {
        return None;
    }
    timings.sort_unstable();
    let excluded = timings.len() / 5;
    let kept = &timings[excluded..timings.len() - excluded];
    let total: u128 = kept.iter().map(Duration::as_nanos).sum();
    let mean = total / kept.len() as u128;
    Some(Duration::from_nanos(u64::try_from(mean).unwrap_or(u64::MAX)))
}

/// Time `runs` resets-then-solves of `solver`.
pub fn benchmark(solver: &mut dyn Solver, runs: usize) -> Result<BenchmarkReport, BenchmarkError> {
    if runs == 0 {
        return Err(BenchmarkError::NoRuns);
    }
    let size = solver.board_size();
    let n = size.get();
    let expected = oracle::expected_solutions(n);
    info!("Benchmarking {size} over {runs} runs");

    let mut timings = Vec::with_capacity(runs);
    let mut solutions = 0;
    for run in 0..runs {
        solver.reset();
        let start = Instant::now();
        let found = solver.solve()?;
        let elapsed = start.elapsed();

        if let Some(expected) = expected {
            if found != expected {
                return Err(BenchmarkError::InvalidSolutions {
                    size: n,
                    found,
                    expected,
                });
            }
        }
        debug!("Run {run}: {found} solutions in {elapsed:?}");
        solutions = found;
        timings.push(elapsed);
    }

    let mean = trimmed_mean(&mut timings).unwrap_or_default();
    let report = BenchmarkReport {
        size,
        runs,
        excluded: runs / 5,
        solutions,
        trimmed_mean: mean,
        fastest: timings[0],
        slowest: timings[runs - 1],
    };
    info!(
        "Benchmark of {size}: trimmed mean {:?} (fastest {:?}, slowest {:?})",
        report.trimmed_mean, report.fastest, report.slowest
    );
    Ok(report)
}
