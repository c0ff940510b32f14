// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Orbits and canonical representatives under the hyperoctahedral group.
//!
//! The hyperoctahedral group of dimension N acts on points by permuting
//! coordinates and flipping their signs; it has `2^N · N!` elements. Every
//! orbit contains exactly one point whose coordinates are non-negative and
//! non-increasing. That point is the orbit's canonical representative.

use crate::geometry::Point;
use std::collections::BTreeSet;

/// Order of the hyperoctahedral group in `dimension` dimensions, saturating at `u128::MAX`.
pub fn group_order(dimension: usize) -> u128 {
    let mut order: u128 = 1;
    for k in 1..=dimension as u128 {
        order = order.saturating_mul(2 * k);
    }
    order
}

/// Canonical representative of a point's orbit: absolute values, sorted descending.
///
/// # Examples
///
/// ```
/// use hypersphere_pattern::geometry::Point;
/// use hypersphere_pattern::symmetry::canonical;
///
/// assert_eq!(canonical(&Point::from([-1, 3, 0])), Point::from([3, 1, 0]));
/// ```
pub fn canonical(point: &Point) -> Point {
    let mut coords: Vec<_> = point.coords().iter().map(|c| c.abs()).collect();
    coords.sort_unstable_by(|a, b| b.cmp(a));
    Point::new(coords)
}

/// Whether a point is its own canonical representative.
pub fn is_canonical(point: &Point) -> bool {
    let coords = point.coords();
    coords.iter().all(|&c| c >= 0) && coords.windows(2).all(|w| w[0] >= w[1])
}

/// All distinct images of a point under coordinate permutation and sign flip.
pub fn orbit(point: &Point) -> BTreeSet<Point> {
    let dimension = point.dimension();
    let mut seen = BTreeSet::new();
    let mut pending = vec![point.clone()];

    while let Some(p) = pending.pop() {
        if !seen.insert(p.clone()) {
            continue;
        }
        for d in 0..dimension {
            if d + 1 < dimension {
                pending.push(p.swapped(d, d + 1));
            }
            if p.coord(d) != 0 {
                pending.push(p.negated(d));
            }
        }
    }
    seen
}
