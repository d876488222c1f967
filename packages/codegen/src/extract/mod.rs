//! Response extraction - parse model text into file records.
//!
//! Extraction is an ordered list of pattern-matching attempts, each a pure
//! function from text to a candidate list, tried in sequence until one
//! yields a non-empty result. The marker strategy looks for explicit
//! `FILE: <path>` labels; the fenced fallback only runs when no marker
//! blocks are found.

mod fenced;
mod infer;
mod marker;

pub use infer::infer_filename;

use tracing::debug;

use crate::types::GeneratedFile;

/// A single extraction strategy.
type Strategy = (&'static str, fn(&str) -> Vec<GeneratedFile>);

/// Strategies in priority order. The fallback only executes when every
/// earlier strategy produced zero files.
const STRATEGIES: &[Strategy] = &[
    ("marker", marker::extract),
    ("fenced", fenced::extract),
];

/// Extract file records from raw model response text.
///
/// Never errors: malformed input is normal control flow, and the worst
/// case is an empty list. Records preserve first-occurrence order from
/// the source text.
pub fn extract_files(response_text: &str) -> Vec<GeneratedFile> {
    for (name, strategy) in STRATEGIES {
        let files = strategy(response_text);
        if !files.is_empty() {
            debug!(strategy = name, count = files.len(), "extracted files");
            return files;
        }
    }

    debug!("no files extracted from response");
    Vec::new()
}
