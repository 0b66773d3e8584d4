//! # dxf2svg Render
//!
//! Writes assembled paths and circles as an SVG document.

pub mod document;
pub mod error;
pub mod writer;

pub use document::{content_bounds, draw_path, render_document, view_box_for};
pub use error::{RenderError, RenderResult};
pub use writer::{extra_params, SvgWriter};
