//! # dxf2svg Core
//!
//! Geometric primitives and the path-assembly engine.
//!
//! Segments arrive in arbitrary order and direction. [`PathCollection`]
//! chains every pair of segments whose endpoints meet (within
//! [`COORD_EPSILON`]) into continuous [`Path`]s, reversing segments where
//! needed, and flags the chains that end where they start.
//!
//! ```
//! use dxf2svg_core::{Coord, PathCollection, Segment};
//!
//! let mut paths = PathCollection::new();
//! paths.add_segment(Segment::line(Coord::new(1.0, 0.0), Coord::new(0.0, 1.0)));
//! paths.add_segment(Segment::line(Coord::new(0.0, 0.0), Coord::new(1.0, 0.0)));
//! paths.add_segment(Segment::line(Coord::new(0.0, 0.0), Coord::new(0.0, 1.0)));
//! paths.optimize();
//!
//! assert_eq!(paths.num_paths(), 1);
//! assert!(paths.paths()[0].is_closed());
//! ```

pub mod collection;
pub mod geometry;
pub mod path;
pub mod segment;
pub mod tolerance;

pub use collection::PathCollection;
pub use geometry::{Circle, Coord, Rect};
pub use path::Path;
pub use segment::{ArcSegment, LineSegment, Segment};
pub use tolerance::{float_almost_eq, AlmostEq, COORD_EPSILON};
