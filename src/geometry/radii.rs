// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Layer radii and layer indices.
//!
//! A layered hypersphere is described by a strictly decreasing list of
//! radii. Entry 0 bounds the outermost shell; every following entry bounds
//! the next shell inwards. A last entry of 0 makes the innermost shell
//! the single center point.

use crate::error::InvalidInput;
use crate::geometry::Coord;
use serde::Serialize;
use std::fmt;
use std::ops::Deref;

/// Index of a shell within [`LayerRadii`]; 0 is the outermost shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct LayerIndex(usize);

impl LayerIndex {
    /// The outermost layer.
    pub const OUTER: LayerIndex = LayerIndex(0);

    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Get the underlying value.
    pub fn value(self) -> usize {
        self.0
    }
}

impl fmt::Display for LayerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated, strictly decreasing, non-empty list of non-negative radii.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayerRadii(Vec<Coord>);

impl LayerRadii {
    /// Validate a list of radii.
    ///
    /// Rules are checked in order: non-empty, non-negative, strictly decreasing.
    /// The first broken rule is reported.
    pub fn new(radii: Vec<Coord>) -> Result<Self, InvalidInput> {
        if radii.is_empty() {
            return Err(InvalidInput::EmptyRadii);
        }
        if let Some((index, &radius)) = radii.iter().enumerate().find(|(_, r)| **r < 0) {
            return Err(InvalidInput::NegativeRadius { index, radius });
        }
        if let Some(index) = (1..radii.len()).find(|&i| radii[i] >= radii[i - 1]) {
            return Err(InvalidInput::NotStrictlyDecreasing {
                index,
                previous: radii[index - 1],
                radius: radii[index],
            });
        }
        Ok(Self(radii))
    }

    /// Radius of the outermost shell.
    pub fn outer(&self) -> Coord {
        self.0[0]
    }

    /// Number of shells.
    pub fn layer_count(&self) -> usize {
        self.0.len()
    }
}

impl Deref for LayerRadii {
    type Target = [Coord];

    fn deref(&self) -> &[Coord] {
        &self.0
    }
}

impl TryFrom<Vec<Coord>> for LayerRadii {
    type Error = InvalidInput;

    fn try_from(radii: Vec<Coord>) -> Result<Self, Self::Error> {
        Self::new(radii)
    }
}

impl TryFrom<&[Coord]> for LayerRadii {
    type Error = InvalidInput;

    fn try_from(radii: &[Coord]) -> Result<Self, Self::Error> {
        Self::new(radii.to_vec())
    }
}

/// Innermost layer whose radius still reaches `offset`.
///
/// `radii` must be non-increasing and `offset <= radii[0]`.
pub(crate) fn innermost_reaching(radii: &[Coord], offset: Coord) -> LayerIndex {
    debug_assert!(!radii.is_empty() && offset <= radii[0]);
    // Non-increasing, so the shells reaching `offset` form a prefix.
    let reaching = radii.partition_point(|&r| r >= offset);
    LayerIndex(reaching.saturating_sub(1))
}
