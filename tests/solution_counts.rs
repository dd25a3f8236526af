//! Solution counts of every engine against the known sequence.

use queens_engine::oracle;
use queens_engine::search::{
    Engine, EngineConfig, IterativeSolver, ParallelSolver, Partition, RecursiveSolver,
    ReferenceSolver, SearchStatus,
};
use queens_engine::{BoardSize, Solver};

fn size(n: usize) -> BoardSize {
    BoardSize::new(n).unwrap()
}

/// Every engine agrees with the known counts for small boards
#[test]
fn all_engines_match_known_counts() {
    for n in 1..=10 {
        let expected = oracle::expected_solutions(n).unwrap();
        for engine in Engine::ALL {
            let mut solver = EngineConfig::for_size(n)
                .unwrap()
                .engine(engine)
                .threads(3)
                .build()
                .unwrap();
            assert_eq!(solver.solve().unwrap(), expected, "{engine} on {n}x{n}");
        }
    }
}

/// Larger boards through the fast engines only
#[test]
fn fast_engines_match_known_counts_up_to_twelve() {
    for n in 11..=12 {
        let expected = oracle::expected_solutions(n).unwrap();
        assert_eq!(RecursiveSolver::new(size(n)).solve().unwrap(), expected);
        assert_eq!(IterativeSolver::new(size(n)).solve().unwrap(), expected);
        let mut parallel: ParallelSolver = ParallelSolver::new(size(n), 4);
        assert_eq!(parallel.solve().unwrap(), expected);
    }
}

/// Symmetry, partition and thread count never change the count
#[test]
fn configuration_does_not_change_count() {
    let n = 9;
    for symmetry in [true, false] {
        for partition in [Partition::FirstRank, Partition::FirstTwoRanks] {
            for threads in [1, 2, 5, 64] {
                let mut solver = EngineConfig::for_size(n)
                    .unwrap()
                    .engine(Engine::Parallel)
                    .symmetry(symmetry)
                    .partition(partition)
                    .threads(threads)
                    .build()
                    .unwrap();
                let report = solver.run(None).unwrap();
                assert_eq!(report.solutions, 352);
                assert_eq!(report.status, SearchStatus::Completed);
            }
        }
    }
}

/// solve after reset reproduces a fresh solver's count
#[test]
fn reset_is_idempotent() {
    let mut solvers: Vec<Box<dyn Solver>> = vec![
        Box::new(RecursiveSolver::new(size(8))),
        Box::new(IterativeSolver::new(size(8))),
        Box::new(ParallelSolver::<queens_engine::search::Iterative>::new(size(8), 2)),
        Box::new(ReferenceSolver::new(size(8))),
    ];
    for solver in &mut solvers {
        for _ in 0..3 {
            solver.reset();
            assert_eq!(solver.solve().unwrap(), 92);
        }
        assert_eq!(solver.board_size(), size(8));
    }
}

/// N = 0 and oversized boards are rejected, N = 1 has one solution
#[test]
fn boundary_sizes() {
    assert!(EngineConfig::for_size(0).is_err());
    assert!(EngineConfig::for_size(32).is_err());
    for engine in Engine::ALL {
        let mut solver = EngineConfig::for_size(1)
            .unwrap()
            .engine(engine)
            .partition(Partition::FirstTwoRanks)
            .build()
            .unwrap();
        assert_eq!(solver.solve().unwrap(), 1, "{engine}");
    }
    for n in [2, 3] {
        let mut solver = IterativeSolver::new(size(n));
        assert_eq!(solver.solve().unwrap(), 0);
    }
}
