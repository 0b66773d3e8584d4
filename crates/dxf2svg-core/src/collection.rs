//! Path assembly
//!
//! [`PathCollection`] takes an unordered stream of segments and chains
//! them into continuous paths. Segments are added one at a time with
//! [`PathCollection::add_segment`]; each new chain is greedily joined to the
//! first existing path it touches. Because that greedy pass depends on
//! insertion order, [`PathCollection::optimize`] re-inserts every path until
//! the path count stops changing, then marks the loops.

use crate::path::Path;
use crate::segment::Segment;
use crate::tolerance::AlmostEq;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// How a new path attaches to an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Join {
    /// New tail meets existing head: splice in front.
    Front,
    /// New head meets existing tail: splice behind.
    Back,
    /// Heads meet: reverse, then splice in front.
    ReversedFront,
    /// Tails meet: reverse, then splice behind.
    ReversedBack,
}

/// A set of continuous paths built from loose segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathCollection {
    paths: Vec<Path>,
}

impl PathCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths in insertion order.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn num_paths(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Total number of segments across every path.
    pub fn num_segments(&self) -> usize {
        self.paths.iter().map(Path::len).sum()
    }

    /// Number of paths currently flagged closed.
    pub fn num_closed(&self) -> usize {
        self.paths.iter().filter(|p| p.is_closed()).count()
    }

    /// Consumes the collection, yielding its paths.
    pub fn into_paths(self) -> Vec<Path> {
        self.paths
    }

    /// Adds a single segment, joining it to an existing path if possible.
    pub fn add_segment(&mut self, segment: Segment) {
        self.add_path(Path::from_segment(segment));
    }

    /// Merges `new_path` into the first existing path it can attach to, or
    /// keeps it as a new independent path.
    ///
    /// Existing paths are scanned in order. For each one the four join
    /// conditions are checked in a fixed precedence; the first hit wins and
    /// no further paths are considered. Empty paths are ignored.
    pub fn add_path(&mut self, mut new_path: Path) {
        let (Some(head), Some(tail)) = (new_path.front_point(), new_path.back_point()) else {
            trace!("Ignoring empty path");
            return;
        };

        let found = self.paths.iter().enumerate().find_map(|(index, path)| {
            let (Some(front), Some(back)) = (path.front_point(), path.back_point()) else {
                return None;
            };
            let join = if tail.almost_eq(&front) {
                Join::Front
            } else if head.almost_eq(&back) {
                Join::Back
            } else if head.almost_eq(&front) {
                Join::ReversedFront
            } else if tail.almost_eq(&back) {
                Join::ReversedBack
            } else {
                return None;
            };
            Some((index, join))
        });

        let Some((index, join)) = found else {
            self.paths.push(new_path);
            return;
        };

        trace!(index, ?join, segments = new_path.len(), "Joining path");
        let target = &mut self.paths[index];
        match join {
            Join::Front => target.push_path_front(new_path),
            Join::Back => target.push_path_back(new_path),
            Join::ReversedFront => {
                new_path.reverse();
                target.push_path_front(new_path);
            }
            Join::ReversedBack => {
                new_path.reverse();
                target.push_path_back(new_path);
            }
        }
    }

    /// Re-merges all paths until the path count stabilizes, then sets each
    /// path's closed flag from whether its ends meet.
    ///
    /// Returns the number of full passes performed. Calling this again on an
    /// optimized collection changes nothing.
    pub fn optimize(&mut self) -> usize {
        let mut passes = 0;
        loop {
            let before = self.paths.len();
            let snapshot = std::mem::take(&mut self.paths);
            for path in snapshot {
                self.add_path(path);
            }
            passes += 1;
            debug!(pass = passes, before, after = self.paths.len(), "Optimize pass");
            if self.paths.len() == before {
                break;
            }
        }

        for path in &mut self.paths {
            path.closed = match (path.front_point(), path.back_point()) {
                (Some(start), Some(end)) => start.almost_eq(&end),
                _ => false,
            };
        }

        debug!(
            paths = self.paths.len(),
            closed = self.num_closed(),
            passes,
            "Path collection optimized"
        );
        passes
    }
}

impl Extend<Segment> for PathCollection {
    fn extend<I: IntoIterator<Item = Segment>>(&mut self, iter: I) {
        for segment in iter {
            self.add_segment(segment);
        }
    }
}

impl FromIterator<Segment> for PathCollection {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}
