//! # dxf2svg
//!
//! Converts DXF drawings into SVG, joining loose lines and arcs that share
//! endpoints into continuous paths.
//!
//! ## Architecture
//!
//! dxf2svg is organized as a workspace with multiple crates:
//!
//! 1. **dxf2svg-core** - Segments, paths and the path assembler
//! 2. **dxf2svg-import** - DXF reading and coordinate adaptation
//! 3. **dxf2svg-render** - SVG emission
//! 4. **dxf2svg-settings** - Page, style and output configuration
//! 5. **dxf2svg** - This facade and the command line binary
//!
//! ## Example
//!
//! ```no_run
//! use dxf2svg::{convert, write_svg, Config};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let conversion = convert("part.dxf", &config)?;
//! let file = std::fs::File::create("part.svg")?;
//! write_svg(&conversion, &config, std::io::BufWriter::new(file))?;
//! # Ok(())
//! # }
//! ```

use anyhow::Context;
use serde::Serialize;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

pub use dxf2svg_core::{
    AlmostEq, ArcSegment, Circle, Coord, LineSegment, PathCollection, Rect, Segment, COORD_EPSILON,
};
pub use dxf2svg_import::{DxfImporter, ImportError, ImportReport, ImportedDrawing};
pub use dxf2svg_render::{render_document, RenderError, SvgWriter};
pub use dxf2svg_settings::{Config, SettingsError, ViewBoxMode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, so SVG can go to stdout
/// - `RUST_LOG` environment variable support, overriding `level`
pub fn init_logging(level: tracing::Level, format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// Assembled geometry ready for rendering.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub paths: PathCollection,
    pub circles: Vec<Circle>,
    pub report: ImportReport,
    /// Passes the optimizer needed to stabilize.
    pub passes: usize,
}

/// Summary printed by `--report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    #[serde(flatten)]
    pub import: ImportReport,
    pub paths: usize,
    pub closed_paths: usize,
    pub optimize_passes: usize,
}

impl Conversion {
    /// Optimizes freshly imported geometry.
    pub fn from_import(imported: ImportedDrawing) -> Self {
        let ImportedDrawing {
            mut paths,
            circles,
            report,
        } = imported;
        let passes = paths.optimize();
        info!(
            paths = paths.num_paths(),
            closed = paths.num_closed(),
            circles = circles.len(),
            passes,
            "Paths assembled"
        );
        Self {
            paths,
            circles,
            report,
            passes,
        }
    }

    pub fn stats(&self) -> ConversionStats {
        ConversionStats {
            import: self.report.clone(),
            paths: self.paths.num_paths(),
            closed_paths: self.paths.num_closed(),
            optimize_passes: self.passes,
        }
    }
}

fn importer_for(config: &Config) -> DxfImporter {
    DxfImporter::new().with_circles(config.import.include_circles)
}

/// Imports and assembles a DXF file.
pub fn convert<P: AsRef<Path>>(input: P, config: &Config) -> anyhow::Result<Conversion> {
    let input = input.as_ref();
    let imported = importer_for(config)
        .import_file(input)
        .with_context(|| format!("Failed to import {}", input.display()))?;
    Ok(Conversion::from_import(imported))
}

/// Imports and assembles a DXF document from a reader.
pub fn convert_reader<R: Read>(reader: &mut R, config: &Config) -> anyhow::Result<Conversion> {
    let imported = importer_for(config)
        .import_reader(reader)
        .context("Failed to import DXF")?;
    Ok(Conversion::from_import(imported))
}

/// Renders a conversion as an SVG document.
pub fn write_svg<W: Write>(conversion: &Conversion, config: &Config, writer: W) -> anyhow::Result<()> {
    render_document(&conversion.paths, &conversion.circles, config, writer)
        .context("Failed to write SVG")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = "0\nSECTION\n2\nHEADER\n9\n$ACADVER\n1\nAC1015\n0\nENDSEC\n\
0\nSECTION\n2\nENTITIES\n\
0\nLWPOLYLINE\n8\n0\n90\n4\n70\n1\n\
10\n0.0\n20\n0.0\n10\n1.0\n20\n0.0\n10\n1.0\n20\n1.0\n10\n0.0\n20\n1.0\n\
0\nENDSEC\n0\nEOF\n";

    #[test]
    fn test_convert_reader_assembles_and_counts() {
        let conversion =
            convert_reader(&mut std::io::Cursor::new(SQUARE), &Config::default()).unwrap();
        assert_eq!(conversion.paths.num_paths(), 1);
        assert!(conversion.passes >= 1);

        let stats = conversion.stats();
        assert_eq!(stats.paths, 1);
        assert_eq!(stats.closed_paths, 1);
        assert_eq!(stats.import.polylines, 1);
        assert_eq!(stats.import.segments, 4);
    }

    #[test]
    fn test_stats_json_is_flat() {
        let conversion =
            convert_reader(&mut std::io::Cursor::new(SQUARE), &Config::default()).unwrap();
        let json = serde_json::to_value(conversion.stats()).unwrap();
        assert_eq!(json["polylines"], 1);
        assert_eq!(json["closed_paths"], 1);
        assert!(json["skipped"].is_object());
    }

    #[test]
    fn test_write_svg_contains_closed_path() {
        let config = Config::default();
        let conversion = convert_reader(&mut std::io::Cursor::new(SQUARE), &config).unwrap();
        let mut out = Vec::new();
        write_svg(&conversion, &config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("<path").count(), 1);
        assert!(text.contains("\n  Z'/>"));
    }

    #[test]
    fn test_convert_missing_file_has_context() {
        let err = convert("/nonexistent/input.dxf", &Config::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to import /nonexistent/input.dxf"));
    }
}
