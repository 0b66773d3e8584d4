//! Segment types: the drawable curve primitives that paths are built from.

use crate::geometry::{Coord, Rect};
use crate::tolerance::{float_almost_eq, AlmostEq};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

/// A straight line from `a` to `b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub a: Coord,
    pub b: Coord,
}

/// A circular arc from `a` to `b`, parameterized the way an SVG `A`
/// command is: radius plus large-arc and sweep flags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    pub a: Coord,
    pub b: Coord,
    pub radius: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

/// A single drawable curve with two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Line(LineSegment),
    Arc(ArcSegment),
}

impl Segment {
    /// Creates a line segment. Parameters are stored verbatim.
    pub fn line(a: Coord, b: Coord) -> Self {
        Segment::Line(LineSegment { a, b })
    }

    /// Creates a circular arc segment. Parameters are stored verbatim.
    pub fn arc(a: Coord, b: Coord, radius: f64, large_arc: bool, sweep: bool) -> Self {
        Segment::Arc(ArcSegment {
            a,
            b,
            radius,
            large_arc,
            sweep,
        })
    }

    /// Start point.
    pub fn endpoint1(&self) -> Coord {
        match self {
            Segment::Line(l) => l.a,
            Segment::Arc(arc) => arc.a,
        }
    }

    /// End point.
    pub fn endpoint2(&self) -> Coord {
        match self {
            Segment::Line(l) => l.b,
            Segment::Arc(arc) => arc.b,
        }
    }

    /// Reverses traversal direction in place.
    ///
    /// Arcs also flip their sweep flag so the drawn curve stays the same.
    /// Applying this twice restores the original value exactly.
    pub fn reverse(&mut self) {
        match self {
            Segment::Line(l) => std::mem::swap(&mut l.a, &mut l.b),
            Segment::Arc(arc) => {
                std::mem::swap(&mut arc.a, &mut arc.b);
                arc.sweep = !arc.sweep;
            }
        }
    }

    /// Returns the reversed segment.
    pub fn reversed(mut self) -> Self {
        self.reverse();
        self
    }

    pub fn bounding_box(&self) -> Rect {
        match self {
            Segment::Line(l) => Rect::new(l.a, l.b),
            Segment::Arc(arc) => arc.bounding_box(),
        }
    }

    /// Short variant name, used in logs and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Segment::Line(_) => "line",
            Segment::Arc(_) => "arc",
        }
    }
}

impl AlmostEq for Segment {
    /// A segment equals itself traversed backwards. Different variants are
    /// never equal.
    fn almost_eq(&self, other: &Segment) -> bool {
        match (self, other) {
            (Segment::Line(x), Segment::Line(y)) => {
                (x.a.almost_eq(&y.a) && x.b.almost_eq(&y.b))
                    || (x.a.almost_eq(&y.b) && x.b.almost_eq(&y.a))
            }
            (Segment::Arc(x), Segment::Arc(y)) => {
                if !float_almost_eq(x.radius, y.radius) || x.large_arc != y.large_arc {
                    return false;
                }
                let same_direction =
                    x.a.almost_eq(&y.a) && x.b.almost_eq(&y.b) && x.sweep == y.sweep;
                let opposite_direction =
                    x.a.almost_eq(&y.b) && x.b.almost_eq(&y.a) && x.sweep != y.sweep;
                same_direction || opposite_direction
            }
            _ => false,
        }
    }
}

impl ArcSegment {
    /// Radius actually used when drawing. A radius too small to span the
    /// chord is scaled up to half the chord, as SVG renderers do.
    pub fn effective_radius(&self) -> f64 {
        let half_chord = self.a.distance_to(&self.b) / 2.0;
        self.radius.abs().max(half_chord)
    }

    /// Center of the circle this arc lies on, or `None` when the arc draws
    /// nothing (identical endpoints or zero radius).
    pub fn center(&self) -> Option<Coord> {
        if self.a == self.b || float_almost_eq(self.radius, 0.0) {
            return None;
        }

        // Endpoint to center conversion for a circle (rx == ry, no rotation).
        let hx = (self.a.x - self.b.x) / 2.0;
        let hy = (self.a.y - self.b.y) / 2.0;
        let r = self.effective_radius();
        let d2 = hx * hx + hy * hy;
        let mut coef = ((r * r - d2) / d2).max(0.0).sqrt();
        if self.large_arc == self.sweep {
            coef = -coef;
        }

        let mid = self.a.midpoint(&self.b);
        Some(Coord::new(mid.x + coef * hy, mid.y - coef * hx))
    }

    /// Bounds of the swept curve, including any axis extremes it passes.
    pub fn bounding_box(&self) -> Rect {
        let mut rect = Rect::new(self.a, self.b);
        let Some(center) = self.center() else {
            return rect;
        };

        let r = self.effective_radius();
        // Large arc whose ends nearly meet: a full turn.
        let full_turn = self.large_arc && self.a.almost_eq(&self.b);
        let start = (self.a.y - center.y).atan2(self.a.x - center.x);
        let end = (self.b.y - center.y).atan2(self.b.x - center.x);
        let span = if self.sweep {
            (end - start).rem_euclid(TAU)
        } else {
            (start - end).rem_euclid(TAU)
        };

        for quadrant in 0..4 {
            let angle = f64::from(quadrant) * FRAC_PI_2;
            let offset = if self.sweep {
                (angle - start).rem_euclid(TAU)
            } else {
                (start - angle).rem_euclid(TAU)
            };
            if full_turn || offset <= span {
                rect.expand_to_contain(Coord::new(
                    center.x + r * angle.cos(),
                    center.y + r * angle.sin(),
                ));
            }
        }

        rect
    }
}
