// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for pattern construction and queries.

use crate::geometry::{Coord, Point};

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PatternError>;

/// Errors raised by building or querying a pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// Build parameters were rejected before any generation work.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// Queried point is not part of the pattern.
    #[error("no such point: {point}")]
    NotFound { point: Point },

    /// Queried point has the wrong number of coordinates.
    #[error("point has {actual} coordinates, pattern has dimension {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// The validation rule a build request broke.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("dimension must be at least 1")]
    ZeroDimension,

    #[error("at least one layer radius is required")]
    EmptyRadii,

    #[error("radius {radius} at index {index} is negative")]
    NegativeRadius { index: usize, radius: Coord },

    #[error("radius {radius} at index {index} is not smaller than the preceding radius {previous}")]
    NotStrictlyDecreasing {
        index: usize,
        previous: Coord,
        radius: Coord,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_messages() {
        let err = PatternError::from(InvalidInput::NotStrictlyDecreasing {
            index: 1,
            previous: 3,
            radius: 3,
        });
        assert_eq!(
            err.to_string(),
            "invalid input: radius 3 at index 1 is not smaller than the preceding radius 3"
        );
        assert_eq!(
            PatternError::from(InvalidInput::ZeroDimension).to_string(),
            "invalid input: dimension must be at least 1"
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = PatternError::NotFound {
            point: Point::from([7, -7]),
        };
        assert_eq!(err.to_string(), "no such point: [7 -7]");
    }
}
