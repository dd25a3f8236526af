//! Reference solver over the indexed boolean-array board.
//!
//! Plain recursive backtracking with no symmetry and no bitmask tricks. Slow
//! but easy to audit, it exists to cross-check the fast engines.

use std::time::{Duration, Instant};

use log::debug;

use crate::board::{BoardSize, IndexedBoard, Placement};
use crate::sync::StopFlag;
use crate::timer;

use super::config::EngineConfig;
use super::error::SearchError;
use super::{SearchReport, SearchStatus, SolutionSink, Solver};

const NAME: &str = "reference";

pub struct ReferenceSolver {
    size: BoardSize,
    time_limit: Option<Duration>,
    stop: StopFlag,
    solutions: u64,
}

struct Walk<'a> {
    board: IndexedBoard,
    placement: Placement,
    solutions: u64,
    nodes: u64,
    stop: StopFlag,
    sink: Option<&'a mut dyn SolutionSink>,
}

impl Walk<'_> {
    fn visit(&mut self, rank: usize) -> SearchStatus {
        let n = self.board.size().get();
        if rank == n {
            self.solutions += 1;
            if let Some(sink) = self.sink.as_deref_mut() {
                sink.on_solution(&self.placement);
            }
            return SearchStatus::Completed;
        }
        if self.stop.is_stopped() {
            return SearchStatus::Interrupted;
        }
        for column in 0..n {
            if !self.board.is_safe(column, rank) {
                continue;
            }
            let ids = self.board.place(column, rank);
            self.placement.push(column);
            self.nodes += 1;
            let status = self.visit(rank + 1);
            self.placement.pop();
            self.board.unplace(column, ids);
            if !status.is_complete() {
                return status;
            }
        }
        SearchStatus::Completed
    }
}

impl ReferenceSolver {
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        ReferenceSolver {
            size,
            time_limit: None,
            stop: StopFlag::new(),
            solutions: 0,
        }
    }

    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.board_size).with_time_limit(config.time_limit)
    }

    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    #[must_use]
    pub fn with_stop(mut self, stop: StopFlag) -> Self {
        self.stop = stop;
        self
    }
}

impl Solver for ReferenceSolver {
    fn board_size(&self) -> BoardSize {
        self.size
    }

    fn reset(&mut self) {
        self.solutions = 0;
        self.stop.reset();
    }

    fn solutions(&self) -> u64 {
        self.solutions
    }

    fn run(&mut self, sink: Option<&mut dyn SolutionSink>) -> Result<SearchReport, SearchError> {
        let start = Instant::now();
        let deadline = timer::arm(self.time_limit, &self.stop)?;
        let mut walk = Walk {
            board: IndexedBoard::new(self.size),
            placement: Placement::new(self.size),
            solutions: 0,
            nodes: 0,
            stop: self.stop.clone(),
            sink,
        };
        let status = walk.visit(0);
        let (solutions, nodes) = (walk.solutions, walk.nodes);
        if let Some(deadline) = deadline {
            deadline.cancel();
        }

        self.solutions += solutions;
        let report = SearchReport {
            size: self.size,
            engine: NAME,
            solutions,
            nodes,
            seeds: 1,
            status,
            elapsed: start.elapsed(),
        };
        debug!(
            "{NAME} search of {}: {} solutions, {} nodes in {:?}",
            self.size, report.solutions, report.nodes, report.elapsed
        );
        Ok(report)
    }
}
