// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer midpoint circle recurrence.
//!
//! One [`ShellArc`] tracks the first-octant arc of a single circle: starting
//! at offset 0 with the full radius, every step moves the offset one unit
//! and lowers the radius whenever the decision variable says the true circle
//! has dropped below the midpoint. The arc is complete once the radius falls
//! below the offset (the 45 degree diagonal has been crossed).
//!
//! See <https://en.wikipedia.org/wiki/Midpoint_circle_algorithm>.

use crate::geometry::Coord;

/// Decision-variable state of one shell's arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellArc {
    radius: Coord,
    criterion: Coord,
}

impl ShellArc {
    pub fn new(radius: Coord) -> Self {
        Self {
            radius,
            criterion: 1 - radius,
        }
    }

    /// Current slice radius.
    pub fn radius(self) -> Coord {
        self.radius
    }

    /// Step the arc to offset `x` (the offset just advanced to).
    pub fn advance(&mut self, x: Coord) {
        let mut delta = x;
        if self.criterion > 0 {
            self.radius -= 1;
            delta -= self.radius;
        }
        self.criterion += 4 * delta + 1;
    }

    /// Whether the arc has crossed the diagonal at offset `x`.
    pub fn is_complete(self, x: Coord) -> bool {
        self.radius < x
    }
}

/// First-octant arc of a circle as `(offset, slice radius)` pairs.
///
/// # Examples
///
/// ```
/// use hypersphere_pattern::generator::octant_arc;
///
/// assert_eq!(octant_arc(3), vec![(0, 3), (1, 3), (2, 2)]);
/// ```
pub fn octant_arc(radius: Coord) -> Vec<(Coord, Coord)> {
    let mut arc = ShellArc::new(radius);
    let mut x = 0;
    let mut out = Vec::new();
    while !arc.is_complete(x) {
        out.push((x, arc.radius()));
        x += 1;
        arc.advance(x);
    }
    out
}
