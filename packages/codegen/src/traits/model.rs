//! CodeModel trait for LLM-backed code generation.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::TokenUsage;

/// A completed model reply: the raw text plus reported token usage.
#[derive(Debug, Clone)]
pub struct ModelReply {
    /// Full textual response, as returned by the provider
    pub text: String,

    /// Token usage passed through from the provider
    pub usage: TokenUsage,
}

impl ModelReply {
    /// Create a reply.
    pub fn new(text: impl Into<String>, usage: TokenUsage) -> Self {
        Self {
            text: text.into(),
            usage,
        }
    }
}

/// Trait for text-generation backends.
///
/// Implementations wrap specific LLM providers and handle the specifics
/// of transport and response decoding. The generation pipeline only ever
/// sees a completed string - no streaming or partial-chunk handling.
#[async_trait]
pub trait CodeModel: Send + Sync {
    /// Generate a completion for the given system and user prompts.
    async fn generate(&self, system: &str, user: &str) -> Result<ModelReply>;
}

#[async_trait]
impl CodeModel for Box<dyn CodeModel> {
    async fn generate(&self, system: &str, user: &str) -> Result<ModelReply> {
        (**self).generate(system, user).await
    }
}
