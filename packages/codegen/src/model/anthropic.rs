//! Anthropic implementation of the CodeModel trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use codegen::model::AnthropicModel;
//!
//! let model = AnthropicModel::from_env()?.with_model("claude-sonnet-4-5-20250929");
//! let generator = Generator::new(model, skills);
//! ```

use anthropic_client::{AnthropicClient, Message, MessagesRequest};
use async_trait::async_trait;

use crate::error::{CodegenError, Result};
use crate::traits::model::{CodeModel, ModelReply};
use crate::types::TokenUsage;

/// Anthropic-backed code model.
#[derive(Clone)]
pub struct AnthropicModel {
    client: AnthropicClient,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl AnthropicModel {
    /// Create a model over an existing client.
    pub fn new(client: AnthropicClient) -> Self {
        Self {
            client,
            model: "claude-sonnet-4-5-20250929".to_string(),
            max_tokens: 8000,
            temperature: 0.0,
        }
    }

    /// Create from environment variable `ANTHROPIC_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let client = AnthropicClient::from_env()
            .map_err(|e| CodegenError::Config(e.to_string()))?;
        Ok(Self::new(client))
    }

    /// Set the model id.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the completion token budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// The configured model id.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CodeModel for AnthropicModel {
    async fn generate(&self, system: &str, user: &str) -> Result<ModelReply> {
        let request = MessagesRequest::new(&self.model)
            .max_tokens(self.max_tokens)
            .temperature(self.temperature)
            .system(system)
            .message(Message::user(user));

        let response = self
            .client
            .create_message(request)
            .await
            .map_err(|e| CodegenError::Model(Box::new(e)))?;

        Ok(ModelReply::new(
            response.text(),
            TokenUsage::new(response.usage.input_tokens, response.usage.output_tokens),
        ))
    }
}
