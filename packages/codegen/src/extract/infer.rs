//! Filename inference for unlabeled code blocks.

use regex::Regex;

/// Infer a filename from code content.
///
/// Checked in priority order: an exported function declaration, then a
/// zero-argument arrow assigned to a named constant, then an index-based
/// fallback. The order matters: when both patterns match the same content
/// the exported function's identifier wins.
pub fn infer_filename(content: &str, index: usize) -> String {
    let export_pattern = Regex::new(r"export\s+(?:default\s+)?function\s+(\w+)").unwrap();
    if let Some(caps) = export_pattern.captures(content) {
        return format!("src/components/{}.tsx", &caps[1]);
    }

    let const_pattern = Regex::new(r"const\s+(\w+)\s*=\s*\(\)").unwrap();
    if let Some(caps) = const_pattern.captures(content) {
        return format!("src/components/{}.tsx", &caps[1]);
    }

    format!("src/components/Component{}.tsx", index + 1)
}
