//! # dxf2svg Import
//!
//! Reads DXF drawings with the `dxf` crate and converts LINE, ARC, CIRCLE,
//! LWPOLYLINE and POLYLINE entities into SVG-space geometry.

pub mod adapter;
pub mod error;
pub mod importer;
pub mod report;

pub use error::{ImportError, ImportResult};
pub use importer::{entity_kind, DxfImporter, ImportedDrawing};
pub use report::ImportReport;
