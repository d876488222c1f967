//! Marker strategy - `FILE: <path>` labels followed by fenced code.

use regex::Regex;

use crate::types::GeneratedFile;

/// Extract files labeled with `FILE:` markers.
///
/// Matches `FILE: path` followed by a fenced block optionally tagged with
/// a language hint. The fence interior is non-greedy so that sequential
/// file blocks are each captured separately rather than merged into one
/// span from the first fence-open to the last fence-close.
pub fn extract(response_text: &str) -> Vec<GeneratedFile> {
    let pattern =
        Regex::new(r"(?s)FILE:\s*([^\n]+)\n```(?:tsx?|typescript|javascript)?\n(.*?)```").unwrap();

    pattern
        .captures_iter(response_text)
        .map(|caps| {
            GeneratedFile::new(caps[1].trim(), caps[2].trim())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_block() {
        let text = "FILE: src/pages/Home.tsx\n```tsx\nexport default function Home(){return null}\n```";
        let files = extract(text);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "src/pages/Home.tsx");
        assert_eq!(files[0].content, "export default function Home(){return null}");
    }

    #[test]
    fn test_sequential_blocks_not_merged() {
        let text = "\
FILE: src/pages/UsersPage.tsx
```tsx
export default function UsersPage() { return <div /> }
```

FILE: src/components/UserRow.tsx
```tsx
export function UserRow() { return <tr /> }
```";
        let files = extract(text);
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, "src/pages/UsersPage.tsx");
        assert_eq!(files[1].path, "src/components/UserRow.tsx");
        // Non-greedy interior: the first record must stop at its own fence.
        assert!(!files[0].content.contains("UserRow"));
    }

    #[test]
    fn test_language_hints() {
        for hint in ["tsx", "ts", "typescript", "javascript", ""] {
            let text = format!("FILE: src/a.tsx\n```{hint}\nconst a = 1\n```");
            let files = extract(&text);
            assert_eq!(files.len(), 1, "hint {hint:?} should match");
            assert_eq!(files[0].content, "const a = 1");
        }
    }

    #[test]
    fn test_path_and_content_trimmed() {
        let text = "FILE:   src/pages/Home.tsx  \n```tsx\n\n  const x = 1\n\n```";
        let files = extract(text);
        assert_eq!(files[0].path, "src/pages/Home.tsx");
        assert_eq!(files[0].content, "const x = 1");
    }

    #[test]
    fn test_unterminated_fence_produces_no_record() {
        let text = "FILE: src/pages/Home.tsx\n```tsx\nexport default function Home(){}";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn test_marker_without_fence_produces_no_record() {
        let text = "FILE: src/pages/Home.tsx\nJust prose, no code block.";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn test_empty_fence_interior_preserved() {
        let text = "FILE: src/empty.tsx\n```tsx\n\n```";
        let files = extract(text);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].content, "");
    }
}
