//! Enumerated solutions: validity, uniqueness, mirror closure and order.

use std::collections::HashSet;

use queens_engine::search::{
    CollectingSink, IterativeSolver, ParallelSolver, Partition, RecursiveSolver, ReferenceSolver,
};
use queens_engine::{BoardSize, Placement, Solver};

fn collect(solver: &mut dyn Solver) -> Vec<Placement> {
    let mut sink = CollectingSink::default();
    let report = solver.run(Some(&mut sink)).unwrap();
    assert_eq!(report.solutions, sink.solutions.len() as u64);
    sink.solutions
}

/// Every emitted solution is valid, distinct and has its mirror in the set
#[test]
fn solutions_are_valid_distinct_and_mirror_closed() {
    for n in 1..=9 {
        let size = BoardSize::new(n).unwrap();
        let found = collect(&mut IterativeSolver::new(size));
        let set: HashSet<Placement> = found.iter().copied().collect();
        assert_eq!(set.len(), found.len(), "duplicates on {n}x{n}");
        for placement in &found {
            assert!(placement.is_complete());
            assert!(placement.is_valid(), "{placement:?}");
            assert!(set.contains(&placement.mirrored()));
        }
    }
}

/// Halved and full searches enumerate the same set
#[test]
fn symmetry_reduction_preserves_solution_set() {
    for n in [5, 6, 7, 8] {
        let size = BoardSize::new(n).unwrap();
        let mut halved = collect(&mut RecursiveSolver::new(size));
        let mut full = collect(&mut RecursiveSolver::new(size).with_symmetry(false));
        halved.sort();
        full.sort();
        assert_eq!(halved, full, "{n}x{n}");
    }
}

/// Without symmetry every engine emits in lexicographic order
#[test]
fn unreduced_search_is_lexicographic() {
    let size = BoardSize::new(8).unwrap();
    let recursive = collect(&mut RecursiveSolver::new(size).with_symmetry(false));
    let iterative = collect(&mut IterativeSolver::new(size).with_symmetry(false));
    let reference = collect(&mut ReferenceSolver::new(size));
    let mut parallel: ParallelSolver = ParallelSolver::new(size, 4)
        .with_symmetry(false)
        .with_partition(Partition::FirstTwoRanks);
    let parallel = collect(&mut parallel);

    let mut sorted = reference.clone();
    sorted.sort();
    assert_eq!(reference, sorted);
    assert_eq!(recursive, reference);
    assert_eq!(iterative, reference);
    assert_eq!(parallel, reference);
}
