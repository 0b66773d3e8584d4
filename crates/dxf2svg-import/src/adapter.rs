//! DXF to SVG coordinate adaptation
//!
//! DXF model space is Y-up while SVG is Y-down, so every point is mirrored
//! through the X axis on the way in. Entities whose extrusion direction
//! points down the Z axis are drawn from behind, which mirrors X as well
//! and reverses the winding of arcs.

use dxf::{Point, Vector};
use dxf2svg_core::{float_almost_eq, AlmostEq, Coord, Segment};

/// Returns true when an entity with this extrusion direction is viewed from
/// behind (its X axis is mirrored in the drawing plane).
pub fn is_mirrored(extrusion: &Vector) -> bool {
    extrusion.z < 0.0
}

/// Maps a DXF point into SVG space.
pub fn to_svg(point: &Point, mirrored: bool) -> Coord {
    let x = if mirrored { -point.x } else { point.x };
    Coord::new(x, -point.y)
}

/// Point on a circle at `angle_deg`, measured counter-clockwise in DXF
/// space, mapped into SVG space.
pub fn polar_to_svg(center: &Point, radius: f64, angle_deg: f64, mirrored: bool) -> Coord {
    let angle = angle_deg.to_radians();
    let x = center.x + radius * angle.cos();
    let y = -center.y - radius * angle.sin();
    Coord::new(if mirrored { -x } else { x }, y)
}

/// Angular extent of a counter-clockwise arc in degrees, in `[0, 360)` for
/// normalized inputs.
pub fn arc_span(start_deg: f64, end_deg: f64) -> f64 {
    let end = if end_deg < start_deg {
        end_deg + 360.0
    } else {
        end_deg
    };
    end - start_deg
}

/// Converts a DXF ARC into an SVG-space arc segment.
///
/// DXF arcs always run counter-clockwise from start to end angle. Flipping
/// Y turns that into the negative SVG direction, so the sweep flag is only
/// set for mirrored arcs.
pub fn arc_segment(
    center: &Point,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
    mirrored: bool,
) -> Segment {
    let start = polar_to_svg(center, radius, start_deg, mirrored);
    let end = polar_to_svg(center, radius, end_deg, mirrored);
    let large_arc = arc_span(start_deg, end_deg) > 180.0;
    Segment::arc(start, end, radius, large_arc, mirrored)
}

/// Segment between two consecutive polyline vertices already in SVG space.
///
/// A zero bulge is a straight line. Otherwise the bulge is the tangent of a
/// quarter of the included angle, positive for counter-clockwise in DXF.
pub fn bulge_segment(a: Coord, b: Coord, bulge: f64, mirrored: bool) -> Segment {
    if float_almost_eq(bulge, 0.0) || a.almost_eq(&b) {
        return Segment::line(a, b);
    }

    let chord = a.distance_to(&b);
    let radius = chord * (1.0 + bulge * bulge) / (4.0 * bulge.abs());
    let large_arc = bulge.abs() > 1.0;
    let sweep = (bulge < 0.0) != mirrored;
    Segment::arc(a, b, radius, large_arc, sweep)
}

/// Segments for a polyline given its vertices in SVG space and the bulge
/// stored on each vertex.
///
/// A closed polyline gets an extra segment from the last vertex back to the
/// first, using the last vertex's bulge.
pub fn polyline_segments(vertices: &[(Coord, f64)], closed: bool, mirrored: bool) -> Vec<Segment> {
    let mut segments: Vec<Segment> = vertices
        .windows(2)
        .map(|pair| bulge_segment(pair[0].0, pair[1].0, pair[0].1, mirrored))
        .collect();

    if closed && vertices.len() > 1 {
        if let (Some(&(last, bulge)), Some(&(first, _))) = (vertices.last(), vertices.first()) {
            segments.push(bulge_segment(last, first, bulge, mirrored));
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Coord, x: f64, y: f64) -> bool {
        (a.x - x).abs() < 1e-9 && (a.y - y).abs() < 1e-9
    }

    #[test]
    fn test_default_extrusion_flips_y_only() {
        let up = Vector::new(0.0, 0.0, 1.0);
        assert!(!is_mirrored(&up));
        let c = to_svg(&Point::new(3.0, 4.0, 0.0), is_mirrored(&up));
        assert_eq!(c, Coord::new(3.0, -4.0));
    }

    #[test]
    fn test_negative_extrusion_mirrors_x() {
        let down = Vector::new(0.0, 0.0, -1.0);
        assert!(is_mirrored(&down));
        let c = to_svg(&Point::new(3.0, 4.0, 0.0), is_mirrored(&down));
        assert_eq!(c, Coord::new(-3.0, -4.0));
    }

    #[test]
    fn test_polar_flips_center_and_angle() {
        let center = Point::new(1.0, 1.0, 0.0);
        assert!(close(polar_to_svg(&center, 2.0, 0.0, false), 3.0, -1.0));
        assert!(close(polar_to_svg(&center, 2.0, 90.0, false), 1.0, -3.0));
        assert!(close(polar_to_svg(&center, 2.0, 90.0, true), -1.0, -3.0));
    }

    #[test]
    fn test_arc_span_wraps() {
        assert_eq!(arc_span(0.0, 90.0), 90.0);
        assert_eq!(arc_span(270.0, 90.0), 180.0);
        assert_eq!(arc_span(350.0, 10.0), 20.0);
    }

    #[test]
    fn test_arc_segment_flags() {
        let center = Point::new(0.0, 0.0, 0.0);
        match arc_segment(&center, 1.0, 0.0, 90.0, false) {
            Segment::Arc(arc) => {
                assert!(close(arc.a, 1.0, 0.0));
                assert!(close(arc.b, 0.0, -1.0));
                assert!(!arc.large_arc);
                assert!(!arc.sweep);
            }
            other => panic!("Expected arc, got {:?}", other),
        }

        match arc_segment(&center, 1.0, 90.0, 0.0, true) {
            Segment::Arc(arc) => {
                assert!(arc.large_arc);
                assert!(arc.sweep);
                assert!(close(arc.a, 0.0, -1.0));
                assert!(close(arc.b, -1.0, 0.0));
            }
            other => panic!("Expected arc, got {:?}", other),
        }
    }

    #[test]
    fn test_exact_half_circle_is_not_large() {
        let center = Point::new(0.0, 0.0, 0.0);
        match arc_segment(&center, 1.0, 0.0, 180.0, false) {
            Segment::Arc(arc) => assert!(!arc.large_arc),
            other => panic!("Expected arc, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_bulge_is_line() {
        let seg = bulge_segment(Coord::new(0.0, 0.0), Coord::new(1.0, 0.0), 0.0, false);
        assert_eq!(seg, Segment::line(Coord::new(0.0, 0.0), Coord::new(1.0, 0.0)));
    }

    #[test]
    fn test_unit_bulge_is_semicircle() {
        let seg = bulge_segment(Coord::new(0.0, 0.0), Coord::new(2.0, 0.0), 1.0, false);
        match seg {
            Segment::Arc(arc) => {
                assert!((arc.radius - 1.0).abs() < 1e-12);
                assert!(!arc.large_arc);
                assert!(!arc.sweep);
            }
            other => panic!("Expected arc, got {:?}", other),
        }

        match bulge_segment(Coord::new(0.0, 0.0), Coord::new(2.0, 0.0), -2.0, false) {
            Segment::Arc(arc) => {
                assert!((arc.radius - 1.25).abs() < 1e-12);
                assert!(arc.large_arc);
                assert!(arc.sweep);
            }
            other => panic!("Expected arc, got {:?}", other),
        }

        match bulge_segment(Coord::new(0.0, 0.0), Coord::new(2.0, 0.0), -2.0, true) {
            Segment::Arc(arc) => assert!(!arc.sweep),
            other => panic!("Expected arc, got {:?}", other),
        }
    }

    #[test]
    fn test_closed_polyline_wraps_from_last_vertex() {
        let vertices = [
            (Coord::new(0.0, 0.0), 0.0),
            (Coord::new(1.0, 0.0), 0.0),
            (Coord::new(1.0, 1.0), 0.0),
        ];
        let open = polyline_segments(&vertices, false, false);
        assert_eq!(open.len(), 2);

        let closed = polyline_segments(&vertices, true, false);
        assert_eq!(closed.len(), 3);
        let last = closed[2];
        assert!(last.endpoint1().almost_eq(&Coord::new(1.0, 1.0)));
        assert!(last.endpoint2().almost_eq(&Coord::new(0.0, 0.0)));
    }

    #[test]
    fn test_degenerate_polylines() {
        assert!(polyline_segments(&[], true, false).is_empty());
        assert!(polyline_segments(&[(Coord::new(1.0, 1.0), 0.0)], true, false).is_empty());
    }
}
