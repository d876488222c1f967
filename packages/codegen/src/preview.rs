//! Static preview document for generated files.
//!
//! The preview never interprets or renders the generated source: true
//! rendering would require a transpilation and execution environment,
//! which is out of scope. A main file is selected only to confirm there
//! is something to preview; the returned markup is always the same
//! static explanatory document.

use crate::types::GeneratedFile;

/// Document returned when there is nothing to preview.
const NO_PREVIEW_HTML: &str = "<html><body><p>No preview available</p></body></html>";

/// Fixed preview shell. Generated source is never echoed into this markup.
const PREVIEW_SHELL_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>UI Preview</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        body { margin: 0; padding: 16px; font-family: system-ui, -apple-system, sans-serif; }
    </style>
</head>
<body>
    <div id="preview">
        <div class="bg-muted p-6 rounded-lg border border-border">
            <p class="text-muted-foreground">Preview rendering requires a React runtime.</p>
            <p class="text-sm text-muted-foreground mt-2">View generated code in the "Code" tab.</p>
        </div>
    </div>
</body>
</html>
"#;

/// Select the file the preview stands in for.
///
/// The first file whose path contains a `pages/` segment or the substring
/// `Page` wins; otherwise the first file in the list.
pub fn select_main_file(files: &[GeneratedFile]) -> Option<&GeneratedFile> {
    files
        .iter()
        .find(|file| file.path.contains("pages/") || file.path.contains("Page"))
        .or_else(|| files.first())
}

/// Build the preview document for a set of generated files.
///
/// Never fails; with no files it degrades to a fixed placeholder document.
pub fn build_preview(files: &[GeneratedFile]) -> String {
    match select_main_file(files) {
        Some(_) => PREVIEW_SHELL_HTML.to_string(),
        None => NO_PREVIEW_HTML.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_gets_placeholder() {
        assert_eq!(build_preview(&[]), NO_PREVIEW_HTML);
    }

    #[test]
    fn test_page_file_selected_first() {
        let files = vec![
            GeneratedFile::new("src/components/Button.tsx", "const Button = () => null"),
            GeneratedFile::new("src/pages/Home.tsx", "export default function Home(){}"),
        ];
        let main = select_main_file(&files).unwrap();
        assert_eq!(main.path, "src/pages/Home.tsx");
    }

    #[test]
    fn test_page_substring_matches() {
        let files = vec![
            GeneratedFile::new("src/components/Button.tsx", "const Button = () => null"),
            GeneratedFile::new("src/DashboardPage.tsx", "export default function DashboardPage(){}"),
        ];
        let main = select_main_file(&files).unwrap();
        assert_eq!(main.path, "src/DashboardPage.tsx");
    }

    #[test]
    fn test_first_file_is_fallback() {
        let files = vec![
            GeneratedFile::new("src/components/Button.tsx", "const Button = () => null"),
            GeneratedFile::new("src/components/Card.tsx", "const Card = () => null"),
        ];
        let main = select_main_file(&files).unwrap();
        assert_eq!(main.path, "src/components/Button.tsx");
    }

    #[test]
    fn test_shell_is_static_and_never_echoes_source() {
        let marker = "UNIQUE_SOURCE_MARKER_12345";
        let files = vec![GeneratedFile::new(
            "src/pages/Home.tsx",
            format!("export default function Home() {{ return <p>{marker}</p> }}"),
        )];

        let html = build_preview(&files);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(!html.contains(marker));
        // Same document regardless of which file was selected.
        let other = vec![GeneratedFile::new("src/components/X.tsx", "const X = () => null")];
        assert_eq!(html, build_preview(&other));
    }
}
