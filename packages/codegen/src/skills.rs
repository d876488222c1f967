//! Skill library - assembles the system prompt from on-disk instruction files.
//!
//! Section files are optional: a missing or unreadable file is skipped
//! with a warning and the rest of the prompt is still assembled. Assembly
//! never errors.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::prompts;
use crate::types::PageType;

/// Section files loaded from the skill data directory, in assembly order.
const SECTION_FILES: &[(&str, &str)] = &[
    ("design-system.md", "Design System"),
    ("consistency-rules.md", "Consistency Rules"),
    ("page-templates.md", "Page Templates"),
    ("component-library.md", "Component Library"),
];

/// Loads skill instruction files and formats them into a system prompt.
///
/// Built once at process start and passed into request handlers along
/// with the model - no lazily-initialized globals.
#[derive(Debug, Clone)]
pub struct SkillLibrary {
    skill_data_dir: PathBuf,
}

impl SkillLibrary {
    /// Create a library over the given skill data directory.
    pub fn new(skill_data_dir: impl Into<PathBuf>) -> Self {
        Self {
            skill_data_dir: skill_data_dir.into(),
        }
    }

    /// The directory this library reads from.
    pub fn skill_data_dir(&self) -> &Path {
        &self.skill_data_dir
    }

    /// Assemble the complete system prompt.
    ///
    /// Order: base instructions, optional sections from disk, page-type
    /// guidance when a hint is present, then the output-format contract.
    pub fn system_prompt(&self, page_type: Option<PageType>) -> String {
        let mut parts = vec![prompts::BASE_INSTRUCTIONS.to_string()];

        for (filename, title) in SECTION_FILES {
            if let Some(body) = self.load_file(filename) {
                parts.push(format!("\n## {}\n", title));
                parts.push(body);
            }
        }

        if let Some(page_type) = page_type {
            parts.push("\n## Page Type Guidance\n".to_string());
            parts.push(format!(
                "Generate a {} page type specifically. Follow the {} page template from the templates section above.",
                page_type.as_str().to_uppercase(),
                page_type.as_str(),
            ));
        }

        parts.push(prompts::OUTPUT_FORMAT.to_string());

        parts.join("\n")
    }

    fn load_file(&self, filename: &str) -> Option<String> {
        let path = self.skill_data_dir.join(filename);

        match fs::read_to_string(&path) {
            Ok(body) => Some(body),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skill file not loaded");
                None
            }
        }
    }
}
