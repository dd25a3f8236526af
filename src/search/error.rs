//! Error types for engine configuration and search execution.

use std::fmt;
use std::io;

use crate::board::BoardSizeError;

/// Error type for rejected engine configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board size failed validation
    Board(BoardSizeError),
    /// Worker pool requested with zero workers
    NoWorkers,
    /// Engine name not recognised
    UnknownEngine { name: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Board(err) => write!(f, "Invalid board: {err}"),
            ConfigError::NoWorkers => write!(f, "Worker pool needs at least 1 worker"),
            ConfigError::UnknownEngine { name } => write!(
                f,
                "Unknown engine '{name}', expected recursive, iterative, parallel or reference"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardSizeError> for ConfigError {
    fn from(err: BoardSizeError) -> Self {
        ConfigError::Board(err)
    }
}

/// Error type for searches that did not produce a full count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The OS refused to start a worker thread
    WorkerSpawn { worker_id: usize, reason: String },
    /// A worker panicked before returning its counts
    WorkerPanicked { worker_id: usize },
    /// The OS refused to start the deadline thread for a time limit
    TimerSpawn { reason: String },
    /// The stop flag was raised; `partial` solutions were counted first
    Interrupted { partial: u64 },
}

impl SearchError {
    pub(crate) fn timer_spawn(err: &io::Error) -> Self {
        SearchError::TimerSpawn {
            reason: err.to_string(),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::WorkerSpawn { worker_id, reason } => {
                write!(f, "Failed to spawn worker {worker_id}: {reason}")
            }
            SearchError::WorkerPanicked { worker_id } => {
                write!(f, "Worker {worker_id} panicked, partial counts discarded")
            }
            SearchError::TimerSpawn { reason } => {
                write!(f, "Failed to start the deadline timer: {reason}")
            }
            SearchError::Interrupted { partial } => {
                write!(f, "Search interrupted after {partial} solutions")
            }
        }
    }
}

impl std::error::Error for SearchError {}
