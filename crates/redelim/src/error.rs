//! Error types for delimiter remapping and rendering.

use redelim_scanner::ScanError;
use thiserror::Error;

/// Errors surfaced by delimiter configuration, remapping, and rendering.
///
/// Host-engine failures are folded into these variants by kind; the engine's
/// message text is preserved unchanged.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template syntax error or compilation failure in the host engine.
    #[error("template error: {0}")]
    Template(String),

    /// Named template not registered with the engine.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Context serialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Invalid delimiter configuration.
    #[error("invalid delimiter configuration: {0}")]
    Delimiter(#[from] ScanError),

    /// Other host-engine failure.
    #[error("{0}")]
    Operation(String),
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => RenderError::TemplateNotFound(err.to_string()),
            ErrorKind::SyntaxError
            | ErrorKind::BadEscape
            | ErrorKind::UndefinedError
            | ErrorKind::UnknownTest
            | ErrorKind::UnknownFunction
            | ErrorKind::UnknownFilter
            | ErrorKind::UnknownMethod => RenderError::Template(err.to_string()),
            ErrorKind::BadSerialization => RenderError::Serialization(err.to_string()),
            _ => RenderError::Operation(err.to_string()),
        }
    }
}
