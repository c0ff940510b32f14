// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry closure of a generated hyperoctant.
//!
//! Two phases, each step reading an explicit snapshot of the set as grown
//! by the previous steps and writing into the live set:
//!
//! 1. Diagonal: for each axis `d`, swap coordinates `d` and `(d + 1) mod N`.
//!    One sweep applies at most `2^N` permutation words to a point, fewer
//!    than the `N!` needed from `N = 4` on, so sweeps repeat until one adds
//!    nothing.
//! 2. Axial: for each axis `d`, negate coordinate `d`. Sign flips commute,
//!    so one sweep reaches all `2^N` sign patterns.

use crate::context::{BuildContext, WriteOutcome};
use crate::pattern::Counters;
use tracing::{debug, trace};

/// Expand the context's point set to its full hyperoctahedral orbit.
pub(crate) fn close(ctx: &mut BuildContext) {
    close_diagonal(ctx);
    debug!(
        points = ctx.points.len(),
        sweeps = ctx.statistics.get(Counters::DiagonalSweeps),
        "diagonal closure complete"
    );

    close_axial(ctx);
    debug!(points = ctx.points.len(), "axial closure complete");
}

/// Permutation phase; sweeps until the set is stable.
fn close_diagonal(ctx: &mut BuildContext) {
    let dimension = ctx.dimension();
    if dimension < 2 {
        return;
    }

    loop {
        ctx.statistics.increment(Counters::DiagonalSweeps);
        let mut changed = false;

        for d in 0..dimension {
            let b = (d + 1) % dimension;
            let mut added = 0usize;

            for (point, layer) in ctx.points.snapshot() {
                if point.coord(d) == point.coord(b) {
                    continue;
                }
                let outcome = ctx.record(point.swapped(d, b), layer);
                if outcome == WriteOutcome::Inserted {
                    ctx.statistics.increment(Counters::DiagonalImages);
                    added += 1;
                }
                changed |= outcome.changed();
            }
            trace!(axis = d, partner = b, added, "diagonal step");
        }

        if !changed {
            break;
        }
    }
}

/// Sign phase; one sweep over the axes.
fn close_axial(ctx: &mut BuildContext) {
    for d in 0..ctx.dimension() {
        let mut added = 0usize;

        for (point, layer) in ctx.points.snapshot() {
            if point.coord(d) == 0 {
                continue;
            }
            if ctx.record(point.negated(d), layer) == WriteOutcome::Inserted {
                ctx.statistics.increment(Counters::AxialImages);
                added += 1;
            }
        }
        trace!(axis = d, added, "axial step");
    }
}
