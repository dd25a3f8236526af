//! Cooperative cancellation through the stop flag and time limits.

use std::thread;
use std::time::Duration;

use queens_engine::oracle;
use queens_engine::search::{
    IterativeSolver, ParallelSolver, RecursiveSolver, SearchError, SearchStatus,
};
use queens_engine::{BoardSize, Solver, StopFlag};

/// A flag raised from another thread interrupts a long search
#[test]
fn external_stop_interrupts_search() {
    let size = BoardSize::new(18).unwrap();
    let stop = StopFlag::new();
    let mut solver = IterativeSolver::new(size).with_stop(stop.clone());

    let raiser = {
        let stop = stop.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            stop.stop();
        })
    };
    let report = solver.run(None).unwrap();
    raiser.join().unwrap();

    assert_eq!(report.status, SearchStatus::Interrupted);
    assert!(report.solutions < oracle::expected_solutions(18).unwrap());
}

/// A time limit interrupts every worker of the pool
#[test]
fn time_limit_interrupts_parallel_search() {
    let size = BoardSize::new(19).unwrap();
    let mut solver: ParallelSolver =
        ParallelSolver::new(size, 4).with_time_limit(Some(Duration::from_millis(50)));
    let report = solver.run(None).unwrap();
    assert_eq!(report.status, SearchStatus::Interrupted);
    assert!(report.solutions < oracle::expected_solutions(19).unwrap());
}

/// A generous time limit does not disturb a short search
#[test]
fn unexpired_time_limit_completes() {
    let size = BoardSize::new(8).unwrap();
    let mut solver =
        RecursiveSolver::new(size).with_time_limit(Some(Duration::from_secs(60)));
    let report = solver.run(None).unwrap();
    assert_eq!(report.status, SearchStatus::Completed);
    assert_eq!(report.solutions, 92);
}

/// reset clears a raised flag so the next search runs to completion
#[test]
fn reset_after_interrupt_recovers() {
    let size = BoardSize::new(10).unwrap();
    let mut solver = IterativeSolver::new(size).with_stop(StopFlag::stopped());
    assert_eq!(
        solver.run(None).unwrap().status,
        SearchStatus::Interrupted
    );
    solver.reset();
    assert_eq!(solver.solve().unwrap(), 724);
}

/// solve reports a time-limited run as an error, never as a short count
#[test]
fn solve_rejects_time_limited_run() {
    let size = BoardSize::new(19).unwrap();
    let mut solver: ParallelSolver =
        ParallelSolver::new(size, 2).with_time_limit(Some(Duration::from_millis(20)));
    let err = solver.solve().unwrap_err();
    assert!(matches!(err, SearchError::Interrupted { .. }), "{err}");
}
