//! Planar primitives shared by the assembler, the importer and the renderer.

use crate::tolerance::{float_almost_eq, AlmostEq};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D coordinate in output (SVG, Y-down) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    /// Creates a new coordinate.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another coordinate.
    pub fn distance_to(&self, other: &Coord) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Midpoint between two coordinates.
    pub fn midpoint(&self, other: &Coord) -> Coord {
        Coord::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl AlmostEq for Coord {
    fn almost_eq(&self, other: &Coord) -> bool {
        float_almost_eq(self.x, other.x) && float_almost_eq(self.y, other.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Coord,
    pub max: Coord,
}

impl Rect {
    /// Creates a rectangle from two corners, normalizing min/max.
    pub fn new(a: Coord, b: Coord) -> Self {
        Self {
            min: Coord::new(a.x.min(b.x), a.y.min(b.y)),
            max: Coord::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Degenerate rectangle containing a single point.
    pub fn from_point(p: Coord) -> Self {
        Self { min: p, max: p }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Grows the rectangle so that it contains `p`.
    pub fn expand_to_contain(&mut self, p: Coord) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let mut r = *self;
        r.expand_to_contain(other.min);
        r.expand_to_contain(other.max);
        r
    }

    /// Rectangle grown by `margin` on every side.
    pub fn inflate(&self, margin: f64) -> Rect {
        Rect {
            min: Coord::new(self.min.x - margin, self.min.y - margin),
            max: Coord::new(self.max.x + margin, self.max.y + margin),
        }
    }
}

/// A full circle. Circles are drawn as independent shapes and never take
/// part in path assembly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Coord,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Coord, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn bounding_box(&self) -> Rect {
        let r = self.radius.abs();
        Rect {
            min: Coord::new(self.center.x - r, self.center.y - r),
            max: Coord::new(self.center.x + r, self.center.y + r),
        }
    }
}
