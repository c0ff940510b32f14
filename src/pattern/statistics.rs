// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters collected while a pattern is built. They are frozen into the
//! finished pattern and can be read back for diagnostics.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Points written by the octant generator, mirrors included.
    OctantWrites,
    /// Writes that met an existing point carrying a different layer.
    LayerConflicts,
    /// Points added by coordinate permutation.
    DiagonalImages,
    /// Points added by sign flips.
    AxialImages,
    /// Full passes of adjacent transpositions.
    DiagonalSweeps,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    /// One-line summary: "OctantWrites=12 LayerConflicts=0 ...".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, counter) in Counters::iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, self.get(counter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        for counter in Counters::iter() {
            assert_eq!(stats.get(counter), 0);
        }
    }

    #[test]
    fn test_increment() {
        let mut stats = Statistics::new();
        stats.increment(Counters::AxialImages);
        stats.increment(Counters::AxialImages);
        stats.increment(Counters::DiagonalSweeps);

        assert_eq!(stats.get(Counters::AxialImages), 2);
        assert_eq!(stats.get(Counters::DiagonalSweeps), 1);
        assert_eq!(stats.get(Counters::OctantWrites), 0);
    }

    #[test]
    fn test_display() {
        let mut stats = Statistics::new();
        stats.increment(Counters::OctantWrites);
        assert_eq!(
            stats.to_string(),
            "OctantWrites=1 LayerConflicts=0 DiagonalImages=0 AxialImages=0 DiagonalSweeps=0"
        );
    }
}
