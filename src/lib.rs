// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact integer-lattice hyperspheres.
//!
//! Generates the set of lattice points forming an N-dimensional ball,
//! optionally split into nested, non-overlapping shells (layers), using
//! integer arithmetic only: no trigonometry, no floating point.
//!
//! # Architecture
//!
//! A build runs in three steps:
//!
//! 1. **Validation**: dimension ≥ 1, radii non-empty, non-negative and
//!    strictly decreasing.
//! 2. **Generation**: a recursive, dimension-by-dimension generalization of
//!    the midpoint circle algorithm fills one hyperoctant, walking every
//!    shell's arc in lockstep and tagging each point with its shell.
//! 3. **Symmetry closure**: coordinate swaps and sign flips expand the
//!    hyperoctant into the full pattern, invariant under the hyperoctahedral
//!    group of order `2^N · N!`.
//!
//! The result is an immutable [`PatternSet`]: a deduplicated map from
//! point to [`LayerIndex`], queried with `len`, `contains`, `layer_of` and
//! `iter`.
//!
//! # Example
//!
//! ```
//! use hypersphere_pattern::{build_hypersphere, LayerIndex, Point};
//!
//! let circle = build_hypersphere(2, &[3]).unwrap();
//! assert!(circle.contains(&Point::from([2, 2])));
//! assert!(!circle.contains(&Point::from([3, 2])));
//! assert_eq!(circle.layer_of(&Point::from([-3, 1])).unwrap(), LayerIndex::new(0));
//! ```
//!
//! # Concurrency
//!
//! A build is single-threaded and owns all its state. Finished patterns are
//! read-only and `Sync`, and independent builds can run in parallel.

pub mod builder;
pub(crate) mod context;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod pattern;
pub mod symmetry;

// Re-export commonly used types
pub use builder::{build_hypersphere, HypersphereBuilder};
pub use error::{InvalidInput, PatternError, Result};
pub use geometry::{Coord, LayerIndex, LayerRadii, Point};
pub use pattern::{Counters, PatternSet, PointSet, Statistics};
