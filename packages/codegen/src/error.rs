//! Typed errors for the code generation library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during code generation.
///
/// Note that an unparseable model response is NOT an error: extraction
/// returning zero files is normal control flow, reported in-band through
/// [`GenerationOutcome`](crate::types::GenerationOutcome).
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Model call failed (network, API, parse)
    #[error("model error: {0}")]
    Model(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for code generation operations.
pub type Result<T> = std::result::Result<T, CodegenError>;
