//! Offline extraction demo - no network calls.
//!
//! Feeds a canned model response through the extraction pipeline and
//! prints the resulting file records and preview.
//!
//! ```bash
//! cargo run --example extract_demo
//! ```

use codegen::{build_preview, extract_files};

fn main() {
    let response = "\
Here's a simple home page for you.

FILE: src/pages/HomePage.tsx
```tsx
export default function HomePage() {
  return <main className=\"container mx-auto p-6\">Welcome</main>
}
```

FILE: src/components/Hero.tsx
```tsx
export function Hero() {
  return <section className=\"bg-muted p-8\">Hero</section>
}
```
";

    let files = extract_files(response);
    println!("Extracted {} files:", files.len());
    for file in &files {
        println!("--- {} ({} bytes)", file.path, file.content.len());
    }

    let preview = build_preview(&files);
    println!("\nPreview document ({} bytes):", preview.len());
    println!("{}", preview.lines().take(4).collect::<Vec<_>>().join("\n"));
}
