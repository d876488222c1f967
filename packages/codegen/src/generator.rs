//! Generator - orchestrates prompt assembly, the model call, extraction
//! and preview building for one request.

use tracing::{error, info};

use crate::extract;
use crate::preview;
use crate::skills::SkillLibrary;
use crate::traits::model::CodeModel;
use crate::types::{GenerationOutcome, PageType, TokenUsage};

/// Message reported when both extraction strategies come back empty.
const NO_FILES_MESSAGE: &str =
    "Failed to parse generated code. No valid files found in response.";

/// Turns a natural-language prompt into generated files plus a preview.
///
/// Owns its collaborators and is built once at process start; request
/// handlers hold a shared reference. Each call is independent, with no
/// shared mutable state.
pub struct Generator<M: CodeModel> {
    model: M,
    skills: SkillLibrary,
}

impl<M: CodeModel> Generator<M> {
    /// Create a generator over a model and a skill library.
    pub fn new(model: M, skills: SkillLibrary) -> Self {
        Self { model, skills }
    }

    /// Generate UI code for a prompt.
    ///
    /// Never returns an error: upstream failures and unparseable replies
    /// are both reported in-band through the outcome. Token counts are
    /// zero when the upstream call itself failed.
    pub async fn generate(
        &self,
        prompt: &str,
        page_type: Option<PageType>,
    ) -> GenerationOutcome {
        let system = self.skills.system_prompt(page_type);
        let user = format!("Generate a React frontend for: {}", prompt);

        let reply = match self.model.generate(&system, &user).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, "code generation call failed");
                return GenerationOutcome::failure(e.to_string(), TokenUsage::default());
            }
        };

        let files = extract::extract_files(&reply.text);
        if files.is_empty() {
            return GenerationOutcome::failure(NO_FILES_MESSAGE, reply.usage);
        }

        let preview_html = preview::build_preview(&files);

        info!(
            files = files.len(),
            input_tokens = reply.usage.input,
            output_tokens = reply.usage.output,
            "generation complete"
        );

        GenerationOutcome::success(files, preview_html, reply.usage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockModel;

    fn library() -> SkillLibrary {
        // Section files absent: base instructions + output format only.
        SkillLibrary::new("nonexistent-skill-data")
    }

    #[tokio::test]
    async fn test_successful_generation() {
        let response = "FILE: src/pages/Home.tsx\n```tsx\nexport default function Home(){return null}\n```";
        let model = MockModel::new().with_default_reply(response, TokenUsage::new(100, 350));

        let outcome = Generator::new(model, library())
            .generate("a home page", None)
            .await;

        assert!(outcome.success);
        assert_eq!(outcome.files.len(), 1);
        assert_eq!(outcome.files[0].path, "src/pages/Home.tsx");
        assert!(outcome.preview_html.starts_with("<!DOCTYPE html>"));
        assert_eq!(outcome.token_usage, TokenUsage::new(100, 350));
        assert!(outcome.error.is_none());
    }

    #[tokio::test]
    async fn test_upstream_failure_reported_in_band() {
        let model = MockModel::new().with_failure("connection reset");

        let outcome = Generator::new(model, library())
            .generate("a dashboard", Some(PageType::Dashboard))
            .await;

        assert!(!outcome.success);
        assert!(outcome.files.is_empty());
        assert_eq!(outcome.token_usage, TokenUsage::default());
        assert!(outcome.error.unwrap().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_unparseable_reply_keeps_usage() {
        let model = MockModel::new()
            .with_default_reply("Sorry, I can only chat about weather.", TokenUsage::new(80, 12));

        let outcome = Generator::new(model, library()).generate("a form", None).await;

        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some(NO_FILES_MESSAGE));
        // Usage came back from the service, so it is passed through.
        assert_eq!(outcome.token_usage, TokenUsage::new(80, 12));
    }

    #[tokio::test]
    async fn test_prompt_wiring() {
        let model = MockModel::new();
        let generator = Generator::new(model, library());
        let _ = generator.generate("a pricing table", Some(PageType::List)).await;

        let calls = generator.model.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].user, "Generate a React frontend for: a pricing table");
        assert!(calls[0].system.contains("## Page Type Guidance"));
        assert!(calls[0].system.contains("## Output Format"));
    }
}
