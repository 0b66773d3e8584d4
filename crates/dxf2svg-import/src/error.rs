//! Error types for DXF import.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an import before any geometry is assembled.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The input file could not be opened or read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not a readable DXF document.
    #[error("Failed to parse DXF: {0}")]
    Parse(#[from] dxf::DxfError),
}

/// Result type alias for import operations.
pub type ImportResult<T> = Result<T, ImportError>;
