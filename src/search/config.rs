//! Engine selection and search configuration.
//!
//! `EngineConfig` collects everything a run needs and builds the matching
//! [`Solver`] behind a trait object.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::BoardSize;

use super::error::ConfigError;
use super::smp::ParallelSolver;
use super::symmetry::Partition;
use super::{Iterative, IterativeSolver, RecursiveSolver, ReferenceSolver, Solver};

/// Default worker pool size
pub const DEFAULT_THREADS: usize = 2;

/// Which solver implementation runs the search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Engine {
    Recursive,
    #[default]
    Iterative,
    Parallel,
    /// Indexed boolean arrays, no symmetry
    Reference,
}

impl Engine {
    pub const ALL: [Engine; 4] = [
        Engine::Recursive,
        Engine::Iterative,
        Engine::Parallel,
        Engine::Reference,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Engine::Recursive => "recursive",
            Engine::Iterative => "iterative",
            Engine::Parallel => "parallel",
            Engine::Reference => "reference",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Engine::ALL
            .into_iter()
            .find(|engine| engine.name() == name)
            .ok_or(ConfigError::UnknownEngine { name })
    }
}

/// Configuration for a search run
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    pub board_size: BoardSize,
    pub engine: Engine,
    /// Number of worker threads (parallel engine only)
    pub threads: usize,
    /// Seed granularity (parallel engine only)
    pub partition: Partition,
    /// Halve the first rank by mirror symmetry
    pub symmetry: bool,
    /// Hand every full placement to the caller's renderer
    pub record_solutions: bool,
    /// Raise the stop flag after this long
    pub time_limit: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            board_size: BoardSize::default(),
            engine: Engine::default(),
            threads: DEFAULT_THREADS,
            partition: Partition::default(),
            symmetry: true,
            record_solutions: false,
            time_limit: None,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn new(board_size: BoardSize) -> Self {
        EngineConfig {
            board_size,
            ..Default::default()
        }
    }

    /// Validate a raw board size first
    pub fn for_size(size: usize) -> Result<Self, ConfigError> {
        Ok(Self::new(BoardSize::new(size)?))
    }

    #[must_use]
    pub fn engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    #[must_use]
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    #[must_use]
    pub fn partition(mut self, partition: Partition) -> Self {
        self.partition = partition;
        self
    }

    #[must_use]
    pub fn symmetry(mut self, symmetry: bool) -> Self {
        self.symmetry = symmetry;
        self
    }

    #[must_use]
    pub fn record_solutions(mut self, record: bool) -> Self {
        self.record_solutions = record;
        self
    }

    #[must_use]
    pub fn time_limit(mut self, limit: Option<Duration>) -> Self {
        self.time_limit = limit;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine == Engine::Parallel && self.threads == 0 {
            return Err(ConfigError::NoWorkers);
        }
        Ok(())
    }

    /// Construct the configured solver
    pub fn build(&self) -> Result<Box<dyn Solver>, ConfigError> {
        self.validate()?;
        Ok(match self.engine {
            Engine::Recursive => Box::new(RecursiveSolver::from_config(self)),
            Engine::Iterative => Box::new(IterativeSolver::from_config(self)),
            Engine::Parallel => Box::new(ParallelSolver::<Iterative>::from_config(self)),
            Engine::Reference => Box::new(ReferenceSolver::from_config(self)),
        })
    }
}
