//! Parallel search over a fixed pool of worker threads.
//!
//! The root is split into independent seeds (see [`Partition`]) which are
//! queued once, in discovery order. Each worker pops seeds until the queue
//! is empty or the stop flag is raised, searching each one with a private
//! [`SearchContext`]; no placement state is shared between threads. Per-class
//! counts are summed after every worker has been joined, so the mirror
//! factor is applied exactly once.

use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, info};
use parking_lot::Mutex;

use crate::board::{BoardSize, Placement};
use crate::sync::StopFlag;
use crate::timer;

use super::config::EngineConfig;
use super::context::SearchContext;
use super::error::SearchError;
use super::iterative::Iterative;
use super::symmetry::{self, Partition, Seed, SeedTally};
use super::{CollectingSink, Explore, SearchReport, SearchStatus, SolutionSink, Solver};

type SeedQueue = Arc<Mutex<VecDeque<(usize, Seed)>>>;

/// Result from a single worker thread
#[derive(Debug, Clone)]
pub struct WorkerResult {
    pub worker_id: usize,
    pub tally: SeedTally,
    pub nodes: u64,
    /// Seeds taken from the queue
    pub seeds: usize,
    pub status: SearchStatus,
    /// Recorded solutions keyed by seed index
    pub recorded: Vec<(usize, Vec<Placement>)>,
}

/// Worker-pool solver. Counts match the sequential engines for every
/// thread count and partition.
pub struct ParallelSolver<E = Iterative> {
    size: BoardSize,
    threads: usize,
    partition: Partition,
    symmetry: bool,
    time_limit: Option<Duration>,
    stop: StopFlag,
    solutions: u64,
    nodes: u64,
    _engine: PhantomData<fn() -> E>,
}

impl<E: Explore + 'static> ParallelSolver<E> {
    /// Solver with `threads` workers (at least one) over first-rank seeds.
    #[must_use]
    pub fn new(size: BoardSize, threads: usize) -> Self {
        ParallelSolver {
            size,
            threads: threads.max(1),
            partition: Partition::FirstRank,
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
        Self::new(config.board_size, config.threads)
            .with_partition(config.partition)
            .with_symmetry(config.symmetry)
            .with_time_limit(config.time_limit)
    }

    #[must_use]
    pub fn with_partition(mut self, partition: Partition) -> Self {
        self.partition = partition;
        self
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

    #[must_use]
    pub fn with_stop(mut self, stop: StopFlag) -> Self {
        self.stop = stop;
        self
    }

    #[must_use]
    pub fn threads(&self) -> usize {
        self.threads
    }

    #[must_use]
    pub fn stop_flag(&self) -> &StopFlag {
        &self.stop
    }

    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn spawn_workers(
        &self,
        workers: usize,
        queue: &SeedQueue,
        record: bool,
    ) -> Result<Vec<(usize, JoinHandle<WorkerResult>)>, SearchError> {
        let mut handles = Vec::with_capacity(workers);
        for worker_id in 0..workers {
            let queue = Arc::clone(queue);
            let stop = self.stop.clone();
            let size = self.size;
            let spawned = thread::Builder::new()
                .name(format!("queens-{worker_id}"))
                .spawn(move || run_worker::<E>(worker_id, size, &queue, &stop, record));

            match spawned {
                Ok(handle) => handles.push((worker_id, handle)),
                Err(err) => {
                    self.stop.stop();
                    for (_, handle) in handles {
                        let _ = handle.join();
                    }
                    return Err(SearchError::WorkerSpawn {
                        worker_id,
                        reason: err.to_string(),
                    });
                }
            }
        }
        Ok(handles)
    }
}

impl<E: Explore + 'static> Solver for ParallelSolver<E> {
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
        let seeds = symmetry::plan(self.size, self.symmetry, self.partition);
        let workers = self.threads.min(seeds.len());
        info!(
            "Parallel search of {}: {} seeds ({:?}) over {} workers",
            self.size,
            seeds.len(),
            self.partition,
            workers
        );

        let queue: SeedQueue = Arc::new(Mutex::new(seeds.into_iter().enumerate().collect()));
        let deadline = timer::arm(self.time_limit, &self.stop)?;
        let spawned = self.spawn_workers(workers, &queue, sink.is_some());
        let handles = match spawned {
            Ok(handles) => handles,
            Err(err) => {
                if let Some(deadline) = deadline {
                    deadline.cancel();
                }
                return Err(err);
            }
        };

        // Join every worker before reporting a failure
        let mut results: Vec<WorkerResult> = Vec::with_capacity(handles.len());
        let mut failure = None;
        for (worker_id, handle) in handles {
            match handle.join() {
                Ok(result) => results.push(result),
                Err(_) => {
                    failure.get_or_insert(SearchError::WorkerPanicked { worker_id });
                }
            }
        }
        if let Some(deadline) = deadline {
            deadline.cancel();
        }
        if let Some(err) = failure {
            return Err(err);
        }

        let mut tally = SeedTally::default();
        let mut nodes = 0;
        let mut searched = 0;
        let mut status = if queue.lock().is_empty() {
            SearchStatus::Completed
        } else {
            SearchStatus::Interrupted
        };
        let mut recorded = Vec::new();
        for result in results {
            tally.merge(result.tally);
            nodes += result.nodes;
            searched += result.seeds;
            status = status.and(result.status);
            recorded.extend(result.recorded);
        }

        if let Some(sink) = sink {
            recorded.sort_unstable_by_key(|&(index, _)| index);
            for placement in recorded.iter().flat_map(|(_, found)| found) {
                sink.on_solution(placement);
            }
        }

        let solutions = tally.total();
        self.solutions += solutions;
        self.nodes += nodes;
        let report = SearchReport {
            size: self.size,
            engine: "parallel",
            solutions,
            nodes,
            seeds: searched,
            status,
            elapsed: start.elapsed(),
        };
        info!(
            "Parallel search of {} finished: {} solutions, {} nodes, {:?} in {:?}",
            self.size, report.solutions, report.nodes, report.status, report.elapsed
        );
        Ok(report)
    }
}

/// Drain the shared queue. Partial counts of an interrupted seed are kept.
fn run_worker<E: Explore>(
    worker_id: usize,
    size: BoardSize,
    queue: &SeedQueue,
    stop: &StopFlag,
    record: bool,
) -> WorkerResult {
    let mut result = WorkerResult {
        worker_id,
        tally: SeedTally::default(),
        nodes: 0,
        seeds: 0,
        status: SearchStatus::Completed,
        recorded: Vec::new(),
    };

    loop {
        if stop.is_stopped() {
            result.status = SearchStatus::Interrupted;
            break;
        }
        let Some((index, seed)) = queue.lock().pop_front() else {
            break;
        };

        let mut found = CollectingSink::default();
        let (solutions, nodes, status) = {
            let sink = record.then_some(&mut found as &mut dyn SolutionSink);
            let mut ctx = SearchContext::new(size, stop.clone(), sink);
            let candidates = ctx.load(&seed);
            let status = E::explore(&mut ctx, candidates);
            (ctx.solutions(), ctx.nodes(), status)
        };

        result.tally.add(seed.class, solutions);
        result.nodes += nodes;
        result.seeds += 1;
        if record {
            result.recorded.push((index, found.solutions));
        }
        if !status.is_complete() {
            result.status = status;
            break;
        }
    }

    debug!(
        "Worker {worker_id} done: {} seeds, {} solutions, {} nodes, {:?}",
        result.seeds,
        result.tally.total(),
        result.nodes,
        result.status
    );
    result
}
