//! Error types for the scanner crate.

use thiserror::Error;

/// Errors that can occur while building matchers from delimiter tokens.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Delimiter fragment does not compile to a valid matcher.
    ///
    /// Only pattern-sourced delimiters can trigger this; literal delimiters
    /// are escaped before compilation and always form a valid fragment.
    #[error("invalid delimiter pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A delimiter list had the wrong number of tokens.
    #[error("expected 2 or 4 delimiters, got {0}")]
    DelimiterCount(usize),
}

/// Result type for scanner operations.
pub type Result<T> = std::result::Result<T, ScanError>;
