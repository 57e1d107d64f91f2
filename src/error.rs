//! Error types for rock generation and export

use thiserror::Error;

/// Errors that can occur while generating or exporting a rock
#[derive(Error, Debug)]
pub enum RockError {
    /// Width, height or point count rejected before any random draw
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// The point set cannot be triangulated or hulled
    ///
    /// Not recoverable for this draw; the caller should regenerate.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
    /// Export payload could not be encoded, parsed or validated
    #[error("export failed: {0}")]
    Export(String),
    /// Writing an export file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RockError {
    /// Whether a fresh random draw may succeed where this one failed
    pub fn is_retryable(&self) -> bool {
        matches!(self, RockError::DegenerateGeometry(_))
    }
}

/// Result type alias for rock operations
pub type Result<T> = std::result::Result<T, RockError>;
