// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hyperoctahedral symmetry of lattice patterns.
//!
//! ## Module Structure
//!
//! - `closure`: expands a generated hyperoctant into the full pattern
//! - `canonical`: orbits, canonical representatives, group order
//! - `mod`: Public API and re-exports

pub mod canonical;
pub(crate) mod closure;

pub use canonical::{canonical, group_order, is_canonical, orbit};
