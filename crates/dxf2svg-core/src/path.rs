//! Ordered chains of endpoint-contiguous segments.

use crate::geometry::{Coord, Rect};
use crate::segment::Segment;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One continuous chain of segments.
///
/// Once assembled, the end point of each segment coincides (within
/// tolerance) with the start point of the next one. The chain is only ever
/// repaired by reversing, never by reordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    segments: VecDeque<Segment>,
    /// Set by [`PathCollection::optimize`](crate::PathCollection::optimize)
    /// when the chain ends where it starts.
    pub closed: bool,
}

impl Path {
    /// Creates an empty, open path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path holding a single segment.
    pub fn from_segment(segment: Segment) -> Self {
        let mut path = Self::new();
        path.push_back(segment);
        path
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Segments in drawing order.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &Segment> + ExactSizeIterator {
        self.segments.iter()
    }

    pub fn front(&self) -> Option<&Segment> {
        self.segments.front()
    }

    pub fn back(&self) -> Option<&Segment> {
        self.segments.back()
    }

    /// Free start point of the chain.
    pub fn front_point(&self) -> Option<Coord> {
        self.front().map(Segment::endpoint1)
    }

    /// Free end point of the chain.
    pub fn back_point(&self) -> Option<Coord> {
        self.back().map(Segment::endpoint2)
    }

    pub fn push_front(&mut self, segment: Segment) {
        self.segments.push_front(segment);
    }

    pub fn push_back(&mut self, segment: Segment) {
        self.segments.push_back(segment);
    }

    /// Splices all of `other`'s segments in front of this path's segments.
    pub fn push_path_front(&mut self, mut other: Path) {
        if other.segments.len() <= self.segments.len() {
            while let Some(segment) = other.segments.pop_back() {
                self.segments.push_front(segment);
            }
        } else {
            other.segments.append(&mut self.segments);
            self.segments = other.segments;
        }
    }

    /// Splices all of `other`'s segments after this path's segments.
    pub fn push_path_back(&mut self, mut other: Path) {
        if other.segments.len() <= self.segments.len() {
            self.segments.append(&mut other.segments);
        } else {
            while let Some(segment) = self.segments.pop_back() {
                other.segments.push_front(segment);
            }
            self.segments = other.segments;
        }
    }

    /// Reverses traversal direction: segment order is reversed and every
    /// segment is reversed individually, so the chain stays contiguous.
    pub fn reverse(&mut self) {
        self.segments.make_contiguous().reverse();
        for segment in self.segments.iter_mut() {
            segment.reverse();
        }
    }

    /// Union of the segment bounds, `None` for an empty path.
    pub fn bounding_box(&self) -> Option<Rect> {
        self.segments
            .iter()
            .map(Segment::bounding_box)
            .reduce(|acc, bb| acc.union(&bb))
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
            closed: false,
        }
    }
}
