// Integration tests for rendering documents to files

use dxf2svg_core::{Circle, Coord, PathCollection, Segment};
use dxf2svg_render::{render_document, RenderError};
use dxf2svg_settings::{Config, ViewBoxMode};
use std::io::{self, Write};

fn slot() -> PathCollection {
    let mut paths: PathCollection = [
        Segment::line(Coord::new(0.0, 0.0), Coord::new(4.0, 0.0)),
        Segment::arc(Coord::new(4.0, 0.0), Coord::new(4.0, 2.0), 1.0, false, true),
        Segment::line(Coord::new(4.0, 2.0), Coord::new(0.0, 2.0)),
        Segment::arc(Coord::new(0.0, 2.0), Coord::new(0.0, 0.0), 1.0, false, true),
    ]
    .into_iter()
    .collect();
    paths.optimize();
    paths
}

#[test]
fn test_render_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slot.svg");

    let file = std::fs::File::create(&path).unwrap();
    render_document(&slot(), &[], &Config::default(), io::BufWriter::new(file)).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.matches("<path").count(), 1);
    assert_eq!(text.matches("\n  A").count(), 2);
    assert_eq!(text.matches("\n  L").count(), 2);
    assert!(text.contains("\n  Z'/>"));
}

#[test]
fn test_fit_mode_with_precision() {
    let mut config = Config::default();
    config.page.mode = ViewBoxMode::Fit;
    config.page.margin = 0.5;
    config.output.precision = 2;

    let mut out = Vec::new();
    render_document(
        &slot(),
        &[Circle::new(Coord::new(2.0, 1.0), 0.25)],
        &config,
        &mut out,
    )
    .unwrap();
    let text = String::from_utf8(out).unwrap();

    // Arcs bulge one unit past the straight edges on both sides.
    assert!(text.contains("viewBox=\"-1.50 -0.50 7.00 3.00\""));
    assert!(text.contains("<circle cx='2.00' cy='1.00' r='0.25' "));
}

struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_failure_surfaces() {
    let err = render_document(&slot(), &[], &Config::default(), FailingSink).unwrap_err();
    assert!(matches!(err, RenderError::Io(_)));
}
