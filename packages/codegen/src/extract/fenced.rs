//! Fenced fallback strategy - bare code blocks with inferred filenames.

use regex::Regex;

use super::infer::infer_filename;
use crate::types::GeneratedFile;

/// Extract all fenced code blocks regardless of `FILE:` markers.
///
/// Each block is assigned a filename inferred from its content, falling
/// back to an index-based name. The hint set here is narrower than the
/// marker strategy's (no `javascript`).
pub fn extract(response_text: &str) -> Vec<GeneratedFile> {
    let pattern = Regex::new(r"(?s)```(?:tsx?|typescript)?\n(.*?)```").unwrap();

    pattern
        .captures_iter(response_text)
        .enumerate()
        .map(|(index, caps)| {
            let content = caps[1].trim();
            GeneratedFile::new(infer_filename(content, index), content)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_order_preserved() {
        let text = "\
```tsx
export default function LoginPage() { return null }
```
intervening prose
```tsx
const Sidebar = () => null
```";
        let files = extract(text);
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, "src/components/LoginPage.tsx");
        assert_eq!(files[1].path, "src/components/Sidebar.tsx");
    }

    #[test]
    fn test_index_based_names_count_all_blocks() {
        // Neither block matches an identifier rule; names come from the
        // zero-based position among all fenced blocks found.
        let text = "```\nlet a = 1\n```\n```\nlet b = 2\n```";
        let files = extract(text);
        assert_eq!(files[0].path, "src/components/Component1.tsx");
        assert_eq!(files[1].path, "src/components/Component2.tsx");
    }

    #[test]
    fn test_javascript_hint_not_matched() {
        let text = "```javascript\nconst App = () => null\n```";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn test_unterminated_fence_ignored() {
        let text = "```tsx\nconst App = () => null";
        assert!(extract(text).is_empty());
    }
}
