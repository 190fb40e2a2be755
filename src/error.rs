//! Error types for the table renderer

use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering a table
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Font discovery or text measurement failed
    #[error("Font error: {0}")]
    FontError(String),

    /// Failed to draw onto a surface
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Failed to encode a finished artifact
    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    /// Underlying I/O failure while writing an artifact
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
