// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for lattice patterns.
//!
//! - Point: N-tuple of integer coordinates
//! - LayerRadii: validated, strictly decreasing shell radii
//! - LayerIndex: shell label attached to each pattern point

pub mod point;
pub mod radii;

// Re-export for convenience
pub use point::{Coord, Point};
pub use radii::{LayerIndex, LayerRadii};
