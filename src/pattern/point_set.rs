// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Deduplicating point → payload storage.
//!
//! A PointSet is read-only outside this crate. The single write operation,
//! [`PointSet::set`], is crate-private and only reached through the build
//! context used by the octant generator and the symmetry closer, so a
//! finished pattern cannot be mutated by its consumers.

use crate::error::{PatternError, Result};
use crate::geometry::Point;
use std::collections::BTreeMap;

/// Set of N-dimensional points, each carrying a payload.
///
/// Iteration follows the lexicographic order of the points, so it is
/// stable across repeated iterations and across identical builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointSet<T> {
    dimension: usize,
    points: BTreeMap<Point, T>,
}

impl<T> PointSet<T> {
    pub(crate) fn new(dimension: usize) -> Self {
        Self {
            dimension,
            points: BTreeMap::new(),
        }
    }

    /// Number of coordinates of every stored point.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of distinct points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Membership test. Points of the wrong dimension are never members.
    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains_key(point)
    }

    /// Payload of a point, if present.
    pub fn get(&self, point: &Point) -> Option<&T> {
        self.points.get(point)
    }

    /// Payload of a point.
    ///
    /// # Errors
    ///
    /// - [`PatternError::DimensionMismatch`] if the point has the wrong arity
    /// - [`PatternError::NotFound`] if the point is not in the set
    pub fn payload_of(&self, point: &Point) -> Result<&T> {
        if point.dimension() != self.dimension {
            return Err(PatternError::DimensionMismatch {
                expected: self.dimension,
                actual: point.dimension(),
            });
        }
        self.points.get(point).ok_or_else(|| PatternError::NotFound {
            point: point.clone(),
        })
    }

    /// Iterate over all `(point, payload)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Point, &T)> + '_ {
        self.points.iter()
    }

    /// Insert a point, or overwrite its payload if already present.
    ///
    /// Returns the previous payload.
    pub(crate) fn set(&mut self, point: Point, payload: T) -> Option<T> {
        debug_assert_eq!(point.dimension(), self.dimension);
        self.points.insert(point, payload)
    }
}

impl<T: Clone> PointSet<T> {
    /// Copy of the current contents, for passes that read the set while writing to it.
    pub(crate) fn snapshot(&self) -> Vec<(Point, T)> {
        self.points
            .iter()
            .map(|(point, payload)| (point.clone(), payload.clone()))
            .collect()
    }
}

impl<'a, T> IntoIterator for &'a PointSet<T> {
    type Item = (&'a Point, &'a T);
    type IntoIter = std::collections::btree_map::Iter<'a, Point, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_query() {
        let mut set = PointSet::new(2);
        assert!(set.is_empty());

        assert_eq!(set.set(Point::from([1, 2]), 'a'), None);
        assert_eq!(set.set(Point::from([0, 0]), 'b'), None);

        assert_eq!(set.len(), 2);
        assert!(set.contains(&Point::from([1, 2])));
        assert!(!set.contains(&Point::from([2, 1])));
        assert_eq!(set.get(&Point::from([0, 0])), Some(&'b'));
    }

    #[test]
    fn test_set_overwrites() {
        let mut set = PointSet::new(1);
        set.set(Point::from([3]), 1);
        assert_eq!(set.set(Point::from([3]), 2), Some(1));
        assert_eq!(set.len(), 1);
        assert_eq!(set.payload_of(&Point::from([3])), Ok(&2));
    }

    #[test]
    fn test_payload_of_missing_point() {
        let set: PointSet<u8> = PointSet::new(2);
        assert_eq!(
            set.payload_of(&Point::from([4, 4])),
            Err(PatternError::NotFound {
                point: Point::from([4, 4])
            })
        );
    }

    #[test]
    fn test_payload_of_wrong_dimension() {
        let mut set = PointSet::new(2);
        set.set(Point::from([0, 0]), ());
        assert_eq!(
            set.payload_of(&Point::from([0, 0, 0])),
            Err(PatternError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert!(!set.contains(&Point::from([0, 0, 0])));
    }

    #[test]
    fn test_iteration_is_sorted_and_restartable() {
        let mut set = PointSet::new(2);
        for p in [[2, 0], [-1, 1], [0, -3], [0, 5]] {
            set.set(Point::from(p), p[0] + p[1]);
        }

        let first: Vec<_> = set.iter().map(|(p, _)| p.clone()).collect();
        let second: Vec<_> = (&set).into_iter().map(|(p, _)| p.clone()).collect();

        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                Point::from([-1, 1]),
                Point::from([0, -3]),
                Point::from([0, 5]),
                Point::from([2, 0]),
            ]
        );
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut set = PointSet::new(1);
        set.set(Point::from([1]), 0);
        let snapshot = set.snapshot();
        set.set(Point::from([2]), 0);

        assert_eq!(snapshot, vec![(Point::from([1]), 0)]);
        assert_eq!(set.len(), 2);
    }
}
