// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Finished patterns.
//!
//! ## Module Structure
//!
//! - `point_set`: generic read-only point → payload container
//! - `statistics`: build counters
//! - `mod`: [`PatternSet`], the immutable result of one build

pub mod point_set;
pub mod statistics;

pub use point_set::PointSet;
pub use statistics::{Counters, Statistics};

use crate::error::Result;
use crate::geometry::{LayerIndex, LayerRadii, Point};
use crate::symmetry;

/// A built, immutable, layered hypersphere.
///
/// Every point of the pattern carries the index of the shell it belongs to.
/// The pattern is invariant under all coordinate permutations and sign flips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    radii: LayerRadii,
    points: PointSet<LayerIndex>,
    statistics: Statistics,
}

impl PatternSet {
    pub(crate) fn new(
        radii: LayerRadii,
        points: PointSet<LayerIndex>,
        statistics: Statistics,
    ) -> Self {
        Self {
            radii,
            points,
            statistics,
        }
    }

    pub fn dimension(&self) -> usize {
        self.points.dimension()
    }

    /// Shell radii the pattern was built from.
    pub fn radii(&self) -> &LayerRadii {
        &self.radii
    }

    /// Number of distinct points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: even a radius-0 pattern holds its center point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    /// Layer of a point.
    ///
    /// # Errors
    ///
    /// [`PatternError::NotFound`](crate::PatternError::NotFound) for points
    /// outside the pattern, and
    /// [`PatternError::DimensionMismatch`](crate::PatternError::DimensionMismatch)
    /// for points of the wrong arity.
    pub fn layer_of(&self, point: &Point) -> Result<LayerIndex> {
        self.points.payload_of(point).copied()
    }

    /// Iterate over `(point, layer)` pairs in lexicographic point order.
    pub fn iter(&self) -> impl Iterator<Item = (&Point, LayerIndex)> + '_ {
        self.points.iter().map(|(point, layer)| (point, *layer))
    }

    /// Points that are the canonical representative of their symmetry orbit.
    ///
    /// Every point of the pattern is a permuted and/or sign-flipped image
    /// of exactly one of these.
    pub fn canonical_points(&self) -> impl Iterator<Item = (&Point, LayerIndex)> + '_ {
        self.iter()
            .filter(|(point, _)| symmetry::is_canonical(point))
    }

    /// Number of points in each layer, indexed by layer.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.radii.layer_count()];
        for (_, layer) in self.iter() {
            sizes[layer.value()] += 1;
        }
        sizes
    }

    /// Underlying point container.
    pub fn points(&self) -> &PointSet<LayerIndex> {
        &self.points
    }

    /// Counters recorded while the pattern was built.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = (&'a Point, &'a LayerIndex);
    type IntoIter = std::collections::btree_map::Iter<'a, Point, LayerIndex>;

    fn into_iter(self) -> Self::IntoIter {
        (&self.points).into_iter()
    }
}
