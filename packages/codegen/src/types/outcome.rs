//! Generation outcome - the boundary structure returned to callers.

use serde::{Deserialize, Serialize};

use crate::types::file::GeneratedFile;

/// Token usage passed through from the model API, not computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Input tokens consumed
    pub input: u64,

    /// Output tokens generated
    pub output: u64,
}

impl TokenUsage {
    /// Create a usage record.
    pub fn new(input: u64, output: u64) -> Self {
        Self { input, output }
    }
}

/// The result of one generation request.
///
/// Transient, created per request, not persisted. All failures are
/// reported in-band: `success` is false and `error` populated exactly
/// when extraction yielded zero files or the upstream call failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// Whether generation produced at least one file
    pub success: bool,

    /// Generated files, in first-occurrence order from the response text
    pub files: Vec<GeneratedFile>,

    /// Static HTML preview document
    pub preview_html: String,

    /// Token usage for the request (zero when the upstream call failed)
    pub token_usage: TokenUsage,

    /// Error message when `success` is false
    pub error: Option<String>,
}

impl GenerationOutcome {
    /// Build a successful outcome.
    pub fn success(files: Vec<GeneratedFile>, preview_html: String, usage: TokenUsage) -> Self {
        Self {
            success: true,
            files,
            preview_html,
            token_usage: usage,
            error: None,
        }
    }

    /// Build a failed outcome carrying an error message.
    pub fn failure(error: impl Into<String>, usage: TokenUsage) -> Self {
        Self {
            success: false,
            files: Vec::new(),
            preview_html: String::new(),
            token_usage: usage,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let outcome = GenerationOutcome::success(
            vec![GeneratedFile::new("src/App.tsx", "export default function App(){}")],
            "<html></html>".to_string(),
            TokenUsage::new(120, 800),
        );

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["files"][0]["path"], "src/App.tsx");
        assert_eq!(json["preview_html"], "<html></html>");
        assert_eq!(json["token_usage"]["input"], 120);
        assert_eq!(json["token_usage"]["output"], 800);
        assert_eq!(json["error"], serde_json::Value::Null);
    }

    #[test]
    fn test_failure_has_empty_files() {
        let outcome = GenerationOutcome::failure("upstream timeout", TokenUsage::default());
        assert!(!outcome.success);
        assert!(outcome.files.is_empty());
        assert!(outcome.preview_html.is_empty());
        assert_eq!(outcome.token_usage, TokenUsage::new(0, 0));
        assert_eq!(outcome.error.as_deref(), Some("upstream timeout"));
    }
}
