//! Generated file records.

use serde::{Deserialize, Serialize};

/// A single generated code file.
///
/// Produced only by the extraction pipeline and immutable once created.
/// `path` is a forward-slash relative path; `content` is raw source text
/// and may be empty. Duplicate paths across records are allowed and left
/// to the caller to deduplicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// File path relative to the project root (e.g. "src/pages/Home.tsx")
    pub path: String,

    /// File content (TSX/TypeScript source text)
    pub content: String,
}

impl GeneratedFile {
    /// Create a new file record.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
