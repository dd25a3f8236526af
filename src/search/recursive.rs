//! Recursive depth-first backtracking.

use std::ops::ControlFlow;

use crate::board::ColumnSet;

use super::context::SearchContext;
use super::{Explore, SearchStatus};

/// Recursive engine: one call frame per rank.
#[derive(Clone, Copy, Debug, Default)]
pub struct Recursive;

impl Explore for Recursive {
    const NAME: &'static str = "recursive";

    fn explore(ctx: &mut SearchContext<'_>, candidates: ColumnSet) -> SearchStatus {
        if ctx.occupancy().is_complete() {
            ctx.record_solution();
            return SearchStatus::Completed;
        }
        match descend(ctx, candidates) {
            ControlFlow::Continue(()) => SearchStatus::Completed,
            ControlFlow::Break(()) => SearchStatus::Interrupted,
        }
    }
}

/// Try every candidate column of the current rank, lowest first.
///
/// Placements are always undone before returning, including on `Break`.
fn descend(ctx: &mut SearchContext<'_>, candidates: ColumnSet) -> ControlFlow<()> {
    let all = ctx.occupancy().size().columns();
    let mut remaining = candidates.and(ctx.occupancy().available());

    while !remaining.is_empty() {
        let candidate = remaining.lowest();
        remaining = remaining.xor(candidate);
        let column = candidate.first();

        ctx.place(column);
        let flow = if ctx.occupancy().is_complete() {
            ctx.record_solution();
            ControlFlow::Continue(())
        } else if ctx.should_stop() {
            ControlFlow::Break(())
        } else {
            descend(ctx, all)
        };
        ctx.unplace(column);
        flow?;
    }
    ControlFlow::Continue(())
}
