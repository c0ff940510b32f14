// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hyperoctant generation.
//!
//! An N-dimensional ball is a stack of (N-1)-dimensional ball slices along
//! any axis; the slice radii are exactly what the midpoint circle algorithm
//! computes. In 2D (first quadrant, radius 11):
//!
//! ```text
//! [][][][]                    slice 11, radius  3
//! [][][][][][]                slice 10, radius  5
//! [][][][][][][][]            slice  9, radius  7
//! [][][][][][][][][]          slice  8, radius  8
//! [][][][][][][][][][]        slice  7, radius  9
//! [][][][][][][][][][]        slice  6, radius  9
//! [][][][][][][][][][][]      slice  5, radius 10
//! [][][][][][][][][][][]      slice  4, radius 10
//! [][][][][][][][][][][][]    slice  3, radius 11
//! [][][][][][][][][][][][]    slice  2, radius 11
//! [][][][][][][][][][][][]    slice  1, radius 11
//! [][][][][][][][][][][][]    slice  0, radius 11
//! 0 1 2 3 4 5 6 7 8 9 10 11
//! ```
//!
//! Each slice is itself a ball in one dimension fewer, so the generator
//! recurses axis by axis. On the last free axis a slice is a line segment
//! (the "spine"), laid down directly.
//!
//! Only the first-octant part of each arc is walked (slices up to the 45
//! degree diagonal). The remaining slices are permuted images of points
//! already generated and are filled in by the symmetry closer.
//!
//! All shells of a layered ball are walked in lockstep: every shell keeps its
//! own [`ShellArc`], and the slice at each offset receives the list of slice
//! radii of the shells still active there.

pub mod midpoint;

pub use midpoint::{octant_arc, ShellArc};

use crate::context::BuildContext;
use crate::geometry::radii::innermost_reaching;
use crate::geometry::{Coord, LayerIndex, LayerRadii, Point};
use crate::pattern::Counters;
use tracing::debug;

/// Fills one hyperoctant of a layered ball centered at the origin.
pub(crate) struct OctantGenerator<'a> {
    ctx: &'a mut BuildContext,
    center: Vec<Coord>,
}

impl<'a> OctantGenerator<'a> {
    pub fn new(ctx: &'a mut BuildContext) -> Self {
        let dimension = ctx.dimension();
        Self {
            ctx,
            center: vec![0; dimension],
        }
    }

    /// Generate the hyperoctant for `radii` into the context's point set.
    pub fn generate(mut self, radii: &LayerRadii) {
        debug!(
            dimension = self.center.len(),
            layers = radii.layer_count(),
            outer_radius = radii.outer(),
            "generating hyperoctant"
        );
        self.slice(radii, 0);
        debug!(points = self.ctx.points.len(), "hyperoctant generated");
    }

    /// Fill the ball slice through the current center, free in axes `d..`.
    ///
    /// `radii` are the slice radii of the active shells, outermost first.
    fn slice(&mut self, radii: &[Coord], d: usize) {
        debug_assert!(radii.windows(2).all(|w| w[0] >= w[1]));

        if d + 1 == self.center.len() {
            self.spine(radii, d);
            return; // recursion fixed point
        }

        let mut arcs: Vec<ShellArc> = radii.iter().map(|&r| ShellArc::new(r)).collect();
        let mut x: Coord = 0;
        while !arcs.is_empty() {
            let slice_radii = nested_radii(&arcs);
            self.center[d] = x;
            self.slice(&slice_radii, d + 1);

            x += 1;
            for arc in arcs.iter_mut() {
                arc.advance(x);
            }

            // A retired shell takes every shell inside it along
            if let Some(retired) = arcs.iter().position(|arc| arc.is_complete(x)) {
                arcs.truncate(retired);
            }
        }
        self.center[d] = 0;
    }

    /// Lay down the segment `center ± o·e_d` for `o` in `0..=radii[0]`.
    fn spine(&mut self, radii: &[Coord], d: usize) {
        for offset in 0..=radii[0] {
            let layer = innermost_reaching(radii, offset);

            self.center[d] = offset;
            self.write(layer);
            if offset != 0 {
                self.center[d] = -offset;
                self.write(layer);
            }
        }
        self.center[d] = 0;
    }

    fn write(&mut self, layer: LayerIndex) {
        self.ctx.statistics.increment(Counters::OctantWrites);
        self.ctx.record(Point::new(self.center.clone()), layer);
    }
}

/// Current slice radii, nudged so that no inner shell exceeds the one outside it.
fn nested_radii(arcs: &[ShellArc]) -> Vec<Coord> {
    let mut out: Vec<Coord> = Vec::with_capacity(arcs.len());
    for arc in arcs {
        let radius = match out.last() {
            Some(&outer) => arc.radius().min(outer),
            None => arc.radius(),
        };
        out.push(radius);
    }
    out
}
