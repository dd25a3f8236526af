//! Explicit-stack depth-first backtracking.
//!
//! The call stack of the recursive engine is replaced by a fixed arena of
//! frames indexed by rank, so the hot loop never allocates. Returning from a
//! recursive call becomes popping a frame and undoing its parent's queen.

use crate::board::{ColumnSet, MAX_BOARD_SIZE};

use super::context::SearchContext;
use super::{Explore, SearchStatus};

/// Per-rank cursor: columns still to try and the column currently placed.
#[derive(Clone, Copy, Debug, Default)]
struct Frame {
    candidates: ColumnSet,
    column: usize,
}

/// Iterative engine over a frame arena.
#[derive(Clone, Copy, Debug, Default)]
pub struct Iterative;

impl Explore for Iterative {
    const NAME: &'static str = "iterative";

    fn explore(ctx: &mut SearchContext<'_>, candidates: ColumnSet) -> SearchStatus {
        let n = ctx.occupancy().size().get();
        let base = ctx.occupancy().rank();
        if base == n {
            ctx.record_solution();
            return SearchStatus::Completed;
        }

        let mut frames = [Frame::default(); MAX_BOARD_SIZE];
        let mut depth = base;
        frames[depth].candidates = candidates.and(ctx.occupancy().available());

        loop {
            let frame = &mut frames[depth];
            if frame.candidates.is_empty() {
                if depth == base {
                    return SearchStatus::Completed;
                }
                depth -= 1;
                ctx.unplace(frames[depth].column);
                continue;
            }

            let candidate = frame.candidates.lowest();
            frame.candidates = frame.candidates.xor(candidate);
            let column = candidate.first();
            frame.column = column;
            ctx.place(column);

            if depth + 1 == n {
                ctx.record_solution();
                ctx.unplace(column);
                continue;
            }

            if ctx.should_stop() {
                ctx.unplace(column);
                while depth > base {
                    depth -= 1;
                    ctx.unplace(frames[depth].column);
                }
                return SearchStatus::Interrupted;
            }

            depth += 1;
            frames[depth] = Frame {
                candidates: ctx.occupancy().available(),
                column: 0,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;
    use crate::search::recursive::Recursive;
    use crate::search::symmetry::{root_seeds, Seed};
    use crate::search::CollectingSink;
    use crate::sync::StopFlag;

    fn enumerate<E: Explore>(n: usize) -> Vec<Vec<usize>> {
        let size = BoardSize::new(n).unwrap();
        let mut sink = CollectingSink::default();
        {
            let mut ctx = SearchContext::new(size, StopFlag::new(), Some(&mut sink));
            let candidates = ctx.load(&Seed::root(size));
            assert_eq!(E::explore(&mut ctx, candidates), SearchStatus::Completed);
            assert_eq!(ctx.occupancy().rank(), 0);
        }
        sink.solutions.iter().map(|p| p.to_vec()).collect()
    }

    #[test]
    fn test_same_discovery_order_as_recursive() {
        for n in 1..=8 {
            assert_eq!(enumerate::<Iterative>(n), enumerate::<Recursive>(n), "n = {n}");
        }
    }

    #[test]
    fn test_eight_queens_first_solution() {
        let found = enumerate::<Iterative>(8);
        assert_eq!(found.len(), 92);
        assert_eq!(found[0], vec![0, 4, 7, 5, 2, 6, 1, 3]);
    }

    #[test]
    fn test_seed_search_restores_seed_rank() {
        let size = BoardSize::new(9).unwrap();
        let mut ctx = SearchContext::new(size, StopFlag::new(), None);
        for seed in root_seeds(size, true) {
            let candidates = ctx.load(&seed);
            Iterative::explore(&mut ctx, candidates);
            assert_eq!(*ctx.occupancy(), seed.occupancy);
        }
    }

    #[test]
    fn test_stopped_flag_interrupts_and_unwinds() {
        let size = BoardSize::new(12).unwrap();
        let mut ctx = SearchContext::new(size, StopFlag::stopped(), None);
        let seed = root_seeds(size, true)[2];
        let candidates = ctx.load(&seed);
        assert_eq!(
            Iterative::explore(&mut ctx, candidates),
            SearchStatus::Interrupted
        );
        assert_eq!(*ctx.occupancy(), seed.occupancy);
    }
}
