// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use hypersphere_pattern::symmetry::orbit;
use hypersphere_pattern::{build_hypersphere, Coord, LayerIndex, PatternSet, Point};
use std::collections::{BTreeMap, BTreeSet};

/// Build a pattern whose parameters are known to be valid.
pub fn build(dimension: usize, radii: &[Coord]) -> PatternSet {
    build_hypersphere(dimension, radii)
        .unwrap_or_else(|e| panic!("build({}, {:?}) failed: {}", dimension, radii, e))
}

/// All points of a pattern.
pub fn point_set(pattern: &PatternSet) -> BTreeSet<Point> {
    pattern.iter().map(|(p, _)| p.clone()).collect()
}

/// All `(point, layer)` pairs of a pattern.
pub fn layer_map(pattern: &PatternSet) -> BTreeMap<Point, LayerIndex> {
    pattern.iter().map(|(p, l)| (p.clone(), l)).collect()
}

/// Union of the symmetry orbits of the given points.
pub fn orbits_of(points: &[&[Coord]]) -> BTreeSet<Point> {
    points
        .iter()
        .flat_map(|coords| orbit(&Point::from(*coords)))
        .collect()
}

/// First point whose orbit is not uniformly present with the same layer.
pub fn find_asymmetry(pattern: &PatternSet) -> Option<(Point, Point)> {
    for (point, layer) in pattern.iter() {
        for image in orbit(point) {
            if pattern.layer_of(&image).ok() != Some(layer) {
                return Some((point.clone(), image));
            }
        }
    }
    None
}
