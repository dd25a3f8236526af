//! Benchmarks for the N-Queens search engines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use queens_engine::board::{BoardSize, Occupancy};
use queens_engine::search::{
    IterativeSolver, ParallelSolver, Partition, RecursiveSolver, ReferenceSolver,
};
use queens_engine::Solver;

fn size(n: usize) -> BoardSize {
    BoardSize::new(n).unwrap()
}

fn bench_place_unplace(c: &mut Criterion) {
    let mut group = c.benchmark_group("occupancy");

    let mut occ = Occupancy::new(size(16));
    group.bench_function("place_unplace", |b| {
        b.iter(|| {
            occ.place(black_box(5));
            let free = occ.available();
            occ.unplace(5);
            free
        })
    });

    group.finish();
}

fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential");

    for n in [8, 10, 12] {
        let mut recursive = RecursiveSolver::new(size(n));
        group.bench_with_input(BenchmarkId::new("recursive", n), &n, |b, _| {
            b.iter(|| {
                recursive.reset();
                black_box(recursive.solve().unwrap())
            })
        });

        let mut iterative = IterativeSolver::new(size(n));
        group.bench_with_input(BenchmarkId::new("iterative", n), &n, |b, _| {
            b.iter(|| {
                iterative.reset();
                black_box(iterative.solve().unwrap())
            })
        });
    }

    // Baseline without bitmasks or symmetry
    let mut reference = ReferenceSolver::new(size(10));
    group.bench_function("reference/10", |b| {
        b.iter(|| {
            reference.reset();
            black_box(reference.solve().unwrap())
        })
    });

    group.finish();
}

fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel");
    group.sample_size(20);

    for threads in [1, 2, 4] {
        for partition in [Partition::FirstRank, Partition::FirstTwoRanks] {
            let mut solver: ParallelSolver =
                ParallelSolver::new(size(13), threads).with_partition(partition);
            let id = format!("{threads}t/{partition:?}");
            group.bench_function(BenchmarkId::new("13", id), |b| {
                b.iter(|| {
                    solver.reset();
                    black_box(solver.solve().unwrap())
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_place_unplace, bench_sequential, bench_parallel);
criterion_main!(benches);
