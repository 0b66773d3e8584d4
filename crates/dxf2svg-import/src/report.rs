//! Import statistics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What an import consumed and what it skipped.
///
/// Returned alongside the geometry so callers can see dropped entities
/// without depending on a log subscriber.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// LINE entities converted.
    pub lines: usize,
    /// ARC entities converted.
    pub arcs: usize,
    /// CIRCLE entities converted.
    pub circles: usize,
    /// LWPOLYLINE and POLYLINE entities converted.
    pub polylines: usize,
    /// Segments handed to path assembly.
    pub segments: usize,
    /// Unsupported entities by kind.
    pub skipped: BTreeMap<String, usize>,
}

impl ImportReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one skipped entity of the given kind.
    pub fn record_skipped(&mut self, kind: &str) {
        *self.skipped.entry(kind.to_string()).or_insert(0) += 1;
    }

    /// Total number of skipped entities.
    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }

    /// Number of entities that produced geometry.
    pub fn converted_total(&self) -> usize {
        self.lines + self.arcs + self.circles + self.polylines
    }
}
