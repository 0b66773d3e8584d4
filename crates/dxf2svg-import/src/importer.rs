//! DXF drawing importer
//!
//! Walks the ENTITIES section of a DXF drawing and feeds every supported
//! curve into a [`PathCollection`]. Circles are kept aside as independent
//! shapes. Everything else is reported and skipped.

use crate::adapter::{arc_segment, is_mirrored, polyline_segments, to_svg};
use crate::error::{ImportError, ImportResult};
use crate::report::ImportReport;
use dxf::entities::EntityType;
use dxf::Drawing;
use dxf2svg_core::{Circle, Coord, PathCollection, Segment};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, trace, warn};

/// Geometry extracted from a DXF drawing.
///
/// `paths` holds the raw greedy joins; call
/// [`PathCollection::optimize`] before rendering.
#[derive(Debug, Clone, Default)]
pub struct ImportedDrawing {
    pub paths: PathCollection,
    pub circles: Vec<Circle>,
    pub report: ImportReport,
}

/// Converts DXF entities into assembled segments and circles.
#[derive(Debug, Clone)]
pub struct DxfImporter {
    include_circles: bool,
}

impl Default for DxfImporter {
    fn default() -> Self {
        Self {
            include_circles: true,
        }
    }
}

impl DxfImporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether CIRCLE entities are kept. They are counted either way.
    pub fn with_circles(mut self, include: bool) -> Self {
        self.include_circles = include;
        self
    }

    /// Import a DXF file from disk.
    pub fn import_file<P: AsRef<Path>>(&self, path: P) -> ImportResult<ImportedDrawing> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ImportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loading DXF from {}", path.display());
        self.import_reader(&mut BufReader::new(file))
    }

    /// Import a DXF document from any reader.
    pub fn import_reader<R: Read>(&self, reader: &mut R) -> ImportResult<ImportedDrawing> {
        let drawing = Drawing::load(reader)?;
        Ok(self.import_drawing(&drawing))
    }

    /// Import an already loaded drawing.
    pub fn import_drawing(&self, drawing: &Drawing) -> ImportedDrawing {
        let mut imported = ImportedDrawing::default();

        for entity in drawing.entities() {
            self.convert_entity(&entity.specific, &mut imported);
        }

        let report = &imported.report;
        info!(
            lines = report.lines,
            arcs = report.arcs,
            circles = report.circles,
            polylines = report.polylines,
            segments = report.segments,
            converted = report.converted_total(),
            skipped = report.skipped_total(),
            "DXF import complete"
        );
        imported
    }

    fn convert_entity(&self, specific: &EntityType, out: &mut ImportedDrawing) {
        match specific {
            EntityType::Line(line) => {
                let mirrored = is_mirrored(&line.extrusion_direction);
                trace!("LINE {:?} -> {:?}", line.p1, line.p2);
                out.paths.add_segment(Segment::line(
                    to_svg(&line.p1, mirrored),
                    to_svg(&line.p2, mirrored),
                ));
                out.report.lines += 1;
                out.report.segments += 1;
            }
            EntityType::Circle(circle) => {
                let mirrored = is_mirrored(&circle.normal);
                trace!("CIRCLE {:?} r={}", circle.center, circle.radius);
                out.report.circles += 1;
                if self.include_circles {
                    out.circles
                        .push(Circle::new(to_svg(&circle.center, mirrored), circle.radius));
                }
            }
            EntityType::Arc(arc) => {
                let mirrored = is_mirrored(&arc.normal);
                trace!(
                    "ARC {:?} r={} sa={} ea={}",
                    arc.center,
                    arc.radius,
                    arc.start_angle,
                    arc.end_angle
                );
                out.paths.add_segment(arc_segment(
                    &arc.center,
                    arc.radius,
                    arc.start_angle,
                    arc.end_angle,
                    mirrored,
                ));
                out.report.arcs += 1;
                out.report.segments += 1;
            }
            EntityType::LwPolyline(poly) => {
                let mirrored = is_mirrored(&poly.extrusion_direction);
                let vertices: Vec<(Coord, f64)> = poly
                    .vertices
                    .iter()
                    .map(|v| (to_svg(&dxf::Point::new(v.x, v.y, 0.0), mirrored), v.bulge))
                    .collect();
                self.add_polyline(&vertices, poly.flags & 1 != 0, mirrored, out);
            }
            EntityType::Polyline(poly) => {
                let mirrored = is_mirrored(&poly.normal);
                let vertices: Vec<(Coord, f64)> = poly
                    .vertices()
                    .map(|v| (to_svg(&v.location, mirrored), v.bulge))
                    .collect();
                self.add_polyline(&vertices, poly.flags & 1 != 0, mirrored, out);
            }
            other => {
                let kind = entity_kind(other);
                warn!("Skipping unsupported entity {}", kind);
                out.report.record_skipped(kind);
            }
        }
    }

    fn add_polyline(
        &self,
        vertices: &[(Coord, f64)],
        closed: bool,
        mirrored: bool,
        out: &mut ImportedDrawing,
    ) {
        let segments = polyline_segments(vertices, closed, mirrored);
        trace!(
            vertices = vertices.len(),
            closed,
            segments = segments.len(),
            "POLYLINE"
        );
        out.report.polylines += 1;
        out.report.segments += segments.len();
        out.paths.extend(segments);
    }
}

/// DXF entity name used when reporting a skipped entity.
pub fn entity_kind(specific: &EntityType) -> &'static str {
    match specific {
        EntityType::Line(_) => "LINE",
        EntityType::Circle(_) => "CIRCLE",
        EntityType::Arc(_) => "ARC",
        EntityType::LwPolyline(_) => "LWPOLYLINE",
        EntityType::Polyline(_) => "POLYLINE",
        EntityType::Text(_) => "TEXT",
        EntityType::MText(_) => "MTEXT",
        EntityType::Attribute(_) => "ATTRIB",
        EntityType::AttributeDefinition(_) => "ATTDEF",
        EntityType::ModelPoint(_) => "POINT",
        EntityType::Spline(_) => "SPLINE",
        EntityType::Ellipse(_) => "ELLIPSE",
        EntityType::Insert(_) => "INSERT",
        EntityType::Solid(_) => "SOLID",
        EntityType::Trace(_) => "TRACE",
        EntityType::Face3D(_) => "3DFACE",
        EntityType::Image(_) => "IMAGE",
        EntityType::Leader(_) => "LEADER",
        EntityType::Ray(_) => "RAY",
        EntityType::XLine(_) => "XLINE",
        EntityType::Region(_) => "REGION",
        EntityType::Wipeout(_) => "WIPEOUT",
        EntityType::RotatedDimension(_)
        | EntityType::RadialDimension(_)
        | EntityType::DiameterDimension(_)
        | EntityType::AngularThreePointDimension(_)
        | EntityType::OrdinateDimension(_) => "DIMENSION",
        _ => "UNKNOWN",
    }
}
