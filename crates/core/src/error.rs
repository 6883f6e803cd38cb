//! Error types for the viewer.

use thiserror::Error;

/// Main error type for the viewer.
#[derive(Error, Debug)]
pub enum Error {
    /// Window creation or management errors
    #[error("Window error: {0}")]
    Window(String),

    /// Render collaborator errors (unknown uniform, mesh upload failure)
    #[error("Render error: {0}")]
    Render(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration files
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias using the viewer's Error type.
pub type Result<T> = std::result::Result<T, Error>;
