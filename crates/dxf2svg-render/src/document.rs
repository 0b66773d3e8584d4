//! Whole-document rendering
//!
//! Lays out the page from [`Config`], then draws every assembled path in
//! collection order followed by every standalone circle.

use crate::error::RenderResult;
use crate::writer::SvgWriter;
use dxf2svg_core::{Circle, Coord, Path, PathCollection, Rect, Segment};
use dxf2svg_settings::{Config, ViewBoxMode};
use std::io::Write;
use tracing::{debug, warn};

/// Smallest extent a fitted view box may have along either axis.
const MIN_FIT_EXTENT: f64 = 1e-6;

/// Union of the bounds of all paths and circles, `None` when there is
/// nothing to draw.
pub fn content_bounds(paths: &PathCollection, circles: &[Circle]) -> Option<Rect> {
    paths
        .paths()
        .iter()
        .filter_map(Path::bounding_box)
        .chain(circles.iter().map(Circle::bounding_box))
        .reduce(|acc, bb| acc.union(&bb))
}

/// View box chosen for the given content under `config`.
///
/// In fit mode the content bounds are grown by the configured margin. An
/// empty drawing falls back to the fixed view box.
pub fn view_box_for(config: &Config, paths: &PathCollection, circles: &[Circle]) -> Rect {
    let vb = &config.page.view_box;
    let fixed = Rect::new(
        Coord::new(vb.min_x, vb.min_y),
        Coord::new(vb.min_x + vb.width, vb.min_y + vb.height),
    );

    match config.page.mode {
        ViewBoxMode::Fixed => fixed,
        ViewBoxMode::Fit => match content_bounds(paths, circles) {
            Some(bounds) => {
                let mut fitted = bounds.inflate(config.page.margin);
                // A single point or a straight axis-aligned line has no area.
                if fitted.width() < MIN_FIT_EXTENT {
                    fitted.max.x = fitted.min.x + MIN_FIT_EXTENT;
                }
                if fitted.height() < MIN_FIT_EXTENT {
                    fitted.max.y = fitted.min.y + MIN_FIT_EXTENT;
                }
                fitted
            }
            None => {
                warn!("Nothing to fit, using the fixed view box");
                fixed
            }
        },
    }
}

/// Draws one path as a single `<path>` element. Empty paths are skipped.
pub fn draw_path<W: Write>(svg: &mut SvgWriter<W>, path: &Path, style: &str) -> RenderResult<()> {
    let Some(start) = path.front_point() else {
        return Ok(());
    };

    svg.start_path(start, &[style])?;
    for segment in path.segments() {
        match segment {
            Segment::Line(line) => svg.path_line_to(line.b)?,
            Segment::Arc(arc) => svg.path_arc_to(arc.b, arc.radius, arc.large_arc, arc.sweep)?,
        }
    }
    if path.is_closed() {
        svg.path_close()?;
    }
    svg.end_path()
}

/// Writes a complete SVG document.
pub fn render_document<W: Write>(
    paths: &PathCollection,
    circles: &[Circle],
    config: &Config,
    writer: W,
) -> RenderResult<()> {
    let view_box = view_box_for(config, paths, circles);
    debug!(
        mode = %config.page.mode,
        min_x = view_box.min.x,
        min_y = view_box.min.y,
        width = view_box.width(),
        height = view_box.height(),
        "Rendering SVG"
    );

    let width = format!("width=\"{}\"", config.page.width);
    let height = format!("height=\"{}\"", config.page.height);
    let mut page_params: Vec<&str> = Vec::new();
    if !config.page.width.is_empty() {
        page_params.push(&width);
    }
    if !config.page.height.is_empty() {
        page_params.push(&height);
    }

    let mut svg = SvgWriter::with_precision(writer, config.output.precision);
    svg.start(&view_box, &page_params)?;
    for path in paths.paths() {
        draw_path(&mut svg, path, &config.style.path)?;
    }
    for circle in circles {
        svg.circle(circle.center, circle.radius, &[config.style.circle.as_str()])?;
    }
    svg.end()
}
