// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hypersphere construction.
//!
//! A build validates its parameters, generates one hyperoctant from the
//! origin, closes it under symmetry, and freezes the result.
//!
//! # Example
//!
//! ```
//! use hypersphere_pattern::{HypersphereBuilder, LayerIndex, Point};
//!
//! let ring = HypersphereBuilder::new()
//!     .dimension(2)
//!     .radius(5)
//!     .radius(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(ring.layer_of(&Point::from([5, 0])).unwrap(), LayerIndex::new(0));
//! assert_eq!(ring.layer_of(&Point::from([0, 3])).unwrap(), LayerIndex::new(1));
//! ```

use crate::context::BuildContext;
use crate::error::{InvalidInput, Result};
use crate::generator::OctantGenerator;
use crate::geometry::{Coord, LayerRadii};
use crate::pattern::PatternSet;
use crate::symmetry::closure;
use tracing::debug;

/// Builder for layered hypersphere patterns.
///
/// The dimension must be set explicitly; an unset dimension is rejected
/// like a zero one.
#[derive(Debug, Clone, Default)]
pub struct HypersphereBuilder {
    dimension: usize,
    radii: Vec<Coord>,
}

impl HypersphereBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the space dimension.
    pub fn dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Append the next shell radius (outermost first).
    pub fn radius(mut self, radius: Coord) -> Self {
        self.radii.push(radius);
        self
    }

    /// Append several shell radii (outermost first).
    pub fn radii<I>(mut self, radii: I) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        self.radii.extend(radii);
        self
    }

    /// Validate the parameters and build the pattern.
    ///
    /// # Errors
    ///
    /// [`PatternError::InvalidInput`](crate::PatternError::InvalidInput) if the
    /// dimension is 0, or the radii are empty, negative, or not strictly
    /// decreasing. Nothing is generated in that case.
    pub fn build(&self) -> Result<PatternSet> {
        let radii = self.validate().inspect_err(|rule| {
            debug!(dimension = self.dimension, radii = ?self.radii, %rule, "rejected build");
        })?;

        let mut ctx = BuildContext::new(self.dimension);
        OctantGenerator::new(&mut ctx).generate(&radii);
        closure::close(&mut ctx);

        let pattern = ctx.finish(radii);
        debug!(
            dimension = pattern.dimension(),
            points = pattern.len(),
            statistics = %pattern.statistics(),
            "hypersphere built"
        );
        Ok(pattern)
    }

    fn validate(&self) -> std::result::Result<LayerRadii, InvalidInput> {
        if self.dimension < 1 {
            return Err(InvalidInput::ZeroDimension);
        }
        LayerRadii::new(self.radii.clone())
    }
}

/// Build a layered hypersphere centered at the origin.
///
/// `radii` lists the shell radii from the outermost inwards.
pub fn build_hypersphere(dimension: usize, radii: &[Coord]) -> Result<PatternSet> {
    HypersphereBuilder::new()
        .dimension(dimension)
        .radii(radii.iter().copied())
        .build()
}
