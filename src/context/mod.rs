// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Build context shared by the octant generator and the symmetry closer.
//!
//! The BuildContext owns the point set under construction together with
//! the build counters. It is the only holder of write access to the set:
//! once the builder turns the context into a [`PatternSet`], the points are
//! frozen.
//!
//! # Layer conflicts
//!
//! A slice walk keeps going after an inner shell has passed its 45 degree
//! boundary, and writes that shell's remaining points with an outer layer.
//! The same points reached by symmetry from earlier slices carry the inner
//! layer. Writes therefore keep the innermost (largest) layer index seen for
//! a point.

use crate::geometry::{LayerIndex, LayerRadii, Point};
use crate::pattern::{Counters, PatternSet, PointSet, Statistics};

/// What a single write did to the point set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WriteOutcome {
    /// The point was new.
    Inserted,
    /// The point existed with an outer layer and moved inwards.
    Raised,
    /// Nothing changed.
    Unchanged,
}

impl WriteOutcome {
    pub(crate) fn changed(self) -> bool {
        self != WriteOutcome::Unchanged
    }
}

/// Mutable state of one build.
#[derive(Debug)]
pub(crate) struct BuildContext {
    pub points: PointSet<LayerIndex>,
    pub statistics: Statistics,
}

impl BuildContext {
    pub fn new(dimension: usize) -> Self {
        Self {
            points: PointSet::new(dimension),
            statistics: Statistics::new(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.points.dimension()
    }

    /// Write a point, keeping the innermost layer on conflict.
    pub fn record(&mut self, point: Point, layer: LayerIndex) -> WriteOutcome {
        match self.points.get(&point).copied() {
            None => {
                self.points.set(point, layer);
                WriteOutcome::Inserted
            }
            Some(existing) if existing == layer => WriteOutcome::Unchanged,
            Some(existing) => {
                self.statistics.increment(Counters::LayerConflicts);
                if existing < layer {
                    self.points.set(point, layer);
                    WriteOutcome::Raised
                } else {
                    WriteOutcome::Unchanged
                }
            }
        }
    }

    /// Freeze the context into a finished pattern.
    pub fn finish(self, radii: LayerRadii) -> PatternSet {
        PatternSet::new(radii, self.points, self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_inserts_new_point() {
        let mut ctx = BuildContext::new(2);
        let outcome = ctx.record(Point::from([1, 0]), LayerIndex::new(0));

        assert_eq!(outcome, WriteOutcome::Inserted);
        assert_eq!(ctx.points.len(), 1);
        assert_eq!(ctx.statistics.get(Counters::LayerConflicts), 0);
    }

    #[test]
    fn test_record_same_layer_is_noop() {
        let mut ctx = BuildContext::new(2);
        ctx.record(Point::from([1, 0]), LayerIndex::new(1));
        let outcome = ctx.record(Point::from([1, 0]), LayerIndex::new(1));

        assert_eq!(outcome, WriteOutcome::Unchanged);
        assert!(!outcome.changed());
        assert_eq!(ctx.statistics.get(Counters::LayerConflicts), 0);
    }

    #[test]
    fn test_record_keeps_innermost_layer() {
        let mut ctx = BuildContext::new(2);
        let p = Point::from([3, 1]);

        ctx.record(p.clone(), LayerIndex::new(0));
        assert_eq!(ctx.record(p.clone(), LayerIndex::new(1)), WriteOutcome::Raised);
        assert_eq!(ctx.record(p.clone(), LayerIndex::new(0)), WriteOutcome::Unchanged);

        assert_eq!(ctx.points.get(&p), Some(&LayerIndex::new(1)));
        assert_eq!(ctx.statistics.get(Counters::LayerConflicts), 2);
    }

    #[test]
    fn test_finish_freezes_points() {
        let mut ctx = BuildContext::new(1);
        ctx.record(Point::from([0]), LayerIndex::OUTER);
        let radii = LayerRadii::new(vec![0]).unwrap();

        let pattern = ctx.finish(radii);
        assert_eq!(pattern.len(), 1);
        assert_eq!(pattern.layer_of(&Point::from([0])), Ok(LayerIndex::OUTER));
    }
}
