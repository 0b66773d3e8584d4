//! Error types for SVG rendering.

use std::io;
use thiserror::Error;

/// Errors that can occur while writing SVG output.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The output sink rejected a write.
    #[error("Failed to write SVG: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
