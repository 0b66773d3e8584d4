//! Low-level SVG markup writer
//!
//! Emits the document frame, standalone circles and path data one command
//! at a time. Every number is printed with a fixed number of decimal places.

use crate::error::RenderResult;
use dxf2svg_core::{Coord, Rect};
use std::io::Write;

/// Turns extra element parameters into attribute text.
///
/// A parameter that already looks like an attribute (`name=value`) is
/// emitted verbatim; any other non-empty string becomes an inline style.
/// Each emitted attribute is followed by a single space.
pub fn extra_params(params: &[&str]) -> String {
    let mut out = String::new();
    for param in params {
        if param.find('=').is_some_and(|i| i > 0) {
            out.push_str(param);
            out.push(' ');
        } else if !param.is_empty() {
            out.push_str(&format!("style='{}' ", param));
        }
    }
    out
}

fn flag(b: bool) -> &'static str {
    if b {
        "1"
    } else {
        "0"
    }
}

/// Streaming SVG writer over any [`Write`] sink.
pub struct SvgWriter<W: Write> {
    writer: W,
    precision: usize,
}

impl<W: Write> SvgWriter<W> {
    /// Creates a writer printing numbers with six decimal places.
    pub fn new(writer: W) -> Self {
        Self::with_precision(writer, 6)
    }

    pub fn with_precision(writer: W, precision: usize) -> Self {
        Self { writer, precision }
    }

    /// Consumes the writer and returns the sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn num(&self, v: f64) -> String {
        // Avoid printing "-0.000000" for values that round to zero.
        let s = format!("{:.*}", self.precision, v);
        if s.starts_with('-') && s[1..].bytes().all(|b| b == b'0' || b == b'.') {
            s[1..].to_string()
        } else {
            s
        }
    }

    /// Writes the XML prolog and the opening `<svg>` tag.
    pub fn start(&mut self, view_box: &Rect, params: &[&str]) -> RenderResult<()> {
        write!(
            self.writer,
            "<?xml version=\"1.0\"?>\n<svg version=\"1.1\"\n     viewBox=\"{} {} {} {}\"\n     xmlns=\"http://www.w3.org/2000/svg\" {}>\n",
            self.num(view_box.min.x),
            self.num(view_box.min.y),
            self.num(view_box.width()),
            self.num(view_box.height()),
            extra_params(params)
        )?;
        Ok(())
    }

    /// Closes the `<svg>` element and flushes the sink.
    pub fn end(&mut self) -> RenderResult<()> {
        self.writer.write_all(b"</svg>\n")?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn circle(&mut self, center: Coord, radius: f64, params: &[&str]) -> RenderResult<()> {
        writeln!(
            self.writer,
            "<circle cx='{}' cy='{}' r='{}' {}/>",
            self.num(center.x),
            self.num(center.y),
            self.num(radius),
            extra_params(params)
        )?;
        Ok(())
    }

    /// Opens a `<path>` element and moves to `start`.
    pub fn start_path(&mut self, start: Coord, params: &[&str]) -> RenderResult<()> {
        write!(
            self.writer,
            "<path {}d='M{},{}",
            extra_params(params),
            self.num(start.x),
            self.num(start.y)
        )?;
        Ok(())
    }

    pub fn path_line_to(&mut self, p: Coord) -> RenderResult<()> {
        write!(self.writer, "\n  L{},{}", self.num(p.x), self.num(p.y))?;
        Ok(())
    }

    /// Circular arc to `p`; the x-axis rotation is always zero.
    pub fn path_arc_to(
        &mut self,
        p: Coord,
        radius: f64,
        large_arc: bool,
        sweep: bool,
    ) -> RenderResult<()> {
        let r = self.num(radius);
        write!(
            self.writer,
            "\n  A{},{} 0 {},{} {},{}",
            r,
            r,
            flag(large_arc),
            flag(sweep),
            self.num(p.x),
            self.num(p.y)
        )?;
        Ok(())
    }

    pub fn path_close(&mut self) -> RenderResult<()> {
        self.writer.write_all(b"\n  Z")?;
        Ok(())
    }

    pub fn end_path(&mut self) -> RenderResult<()> {
        self.writer.write_all(b"'/>\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(f: impl FnOnce(&mut SvgWriter<Vec<u8>>)) -> String {
        let mut svg = SvgWriter::new(Vec::new());
        f(&mut svg);
        String::from_utf8(svg.into_inner()).unwrap()
    }

    #[test]
    fn test_extra_params() {
        assert_eq!(extra_params(&[]), "");
        assert_eq!(extra_params(&["width=\"2in\""]), "width=\"2in\" ");
        assert_eq!(extra_params(&["stroke: red"]), "style='stroke: red' ");
        assert_eq!(extra_params(&["", "a=b", "x"]), "a=b style='x' ");
        // A leading '=' does not count as an attribute.
        assert_eq!(extra_params(&["=x"]), "style='=x' ");
    }

    #[test]
    fn test_start_and_end() {
        let text = output(|svg| {
            let vb = Rect::new(Coord::new(0.0, -11.0), Coord::new(19.5, 0.0));
            svg.start(&vb, &["width=\"19.5in\"", "height=\"11in\""]).unwrap();
            svg.end().unwrap();
        });
        assert_eq!(
            text,
            "<?xml version=\"1.0\"?>\n<svg version=\"1.1\"\n     viewBox=\"0.000000 -11.000000 19.500000 11.000000\"\n     xmlns=\"http://www.w3.org/2000/svg\" width=\"19.5in\" height=\"11in\" >\n</svg>\n"
        );
    }

    #[test]
    fn test_path_commands() {
        let text = output(|svg| {
            svg.start_path(Coord::new(0.0, 0.0), &["fill: none"]).unwrap();
            svg.path_line_to(Coord::new(1.0, 0.0)).unwrap();
            svg.path_arc_to(Coord::new(1.0, 2.0), 1.0, false, true).unwrap();
            svg.path_close().unwrap();
            svg.end_path().unwrap();
        });
        assert_eq!(
            text,
            "<path style='fill: none' d='M0.000000,0.000000\n  L1.000000,0.000000\n  A1.000000,1.000000 0 0,1 1.000000,2.000000\n  Z'/>\n"
        );
    }

    #[test]
    fn test_circle_and_precision() {
        let mut svg = SvgWriter::with_precision(Vec::new(), 2);
        svg.circle(Coord::new(1.0, -2.5), 0.126, &[]).unwrap();
        let text = String::from_utf8(svg.into_inner()).unwrap();
        assert_eq!(text, "<circle cx='1.00' cy='-2.50' r='0.13' />\n");
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let text = output(|svg| {
            svg.start_path(Coord::new(-0.0, -1e-12), &[]).unwrap();
        });
        assert_eq!(text, "<path d='M0.000000,0.000000");
    }
}
