// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Point type for N-dimensional integer lattice coordinates.
//!
//! # Examples
//!
//! ```
//! use hypersphere_pattern::geometry::Point;
//!
//! let p = Point::new(vec![3, -1]);
//! assert_eq!(p.dimension(), 2);
//! assert_eq!(p.coord(1), -1);
//! assert_eq!(format!("{}", p), "[3 -1]");
//! ```

use serde::Serialize;
use std::fmt;

/// Integral coordinate (and radius) type.
pub type Coord = i64;

/// A point of the N-dimensional integer lattice.
///
/// Points order lexicographically by coordinate, which is the order
/// in which a built pattern iterates them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Point(Vec<Coord>);

impl Point {
    /// Create a point from its coordinates.
    pub fn new(coords: Vec<Coord>) -> Self {
        Self(coords)
    }

    /// The origin of N-dimensional space.
    pub fn origin(dimension: usize) -> Self {
        Self(vec![0; dimension])
    }

    /// Number of coordinates.
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    /// Coordinate in dimension `d`.
    ///
    /// # Panics
    ///
    /// Panics if `d >= self.dimension()`.
    pub fn coord(&self, d: usize) -> Coord {
        self.0[d]
    }

    /// All coordinates.
    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    /// Copy of this point with coordinate `d` replaced.
    pub fn with_coord(&self, d: usize, value: Coord) -> Self {
        let mut coords = self.0.clone();
        coords[d] = value;
        Self(coords)
    }

    /// Copy of this point with coordinates `a` and `b` exchanged.
    pub fn swapped(&self, a: usize, b: usize) -> Self {
        let mut coords = self.0.clone();
        coords.swap(a, b);
        Self(coords)
    }

    /// Copy of this point with coordinate `d` negated.
    pub fn negated(&self, d: usize) -> Self {
        self.with_coord(d, -self.0[d])
    }

    /// Largest absolute coordinate (Chebyshev distance from the origin).
    pub fn chebyshev_norm(&self) -> Coord {
        self.0.iter().map(|c| c.abs()).max().unwrap_or(0)
    }

    /// Squared Euclidean distance from the origin.
    pub fn norm_squared(&self) -> Coord {
        self.0.iter().map(|c| c * c).sum()
    }
}

impl From<Vec<Coord>> for Point {
    fn from(coords: Vec<Coord>) -> Self {
        Self(coords)
    }
}

impl From<&[Coord]> for Point {
    fn from(coords: &[Coord]) -> Self {
        Self(coords.to_vec())
    }
}

impl<const N: usize> From<[Coord; N]> for Point {
    fn from(coords: [Coord; N]) -> Self {
        Self(coords.to_vec())
    }
}

impl fmt::Display for Point {
    /// Format a point as "[x y z]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}
