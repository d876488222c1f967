//! Testing utilities including mock implementations.
//!
//! Useful for testing applications that use the generation library
//! without making real LLM calls.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{CodegenError, Result};
use crate::traits::model::{CodeModel, ModelReply};
use crate::types::TokenUsage;

/// A mock model for testing.
///
/// Returns deterministic, configurable replies and records every call
/// for assertions.
#[derive(Default)]
pub struct MockModel {
    /// Replies keyed by a substring of the user prompt, checked in
    /// registration order
    replies: Arc<RwLock<Vec<(String, ModelReply)>>>,

    /// Reply used when no keyed reply matches
    default_reply: Arc<RwLock<Option<ModelReply>>>,

    /// When set, every call fails with this message
    failure: Arc<RwLock<Option<String>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockModelCall>>>,
}

/// Record of a call made to the mock model.
#[derive(Debug, Clone)]
pub struct MockModelCall {
    /// The system prompt passed in
    pub system: String,

    /// The user prompt passed in
    pub user: String,
}

impl MockModel {
    /// Create a mock with no configured replies.
    ///
    /// Calls return an empty reply until a reply is configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reply returned when the user prompt contains `key`.
    pub fn with_reply(
        self,
        key: impl Into<String>,
        text: impl Into<String>,
        usage: TokenUsage,
    ) -> Self {
        self.replies
            .write()
            .unwrap()
            .push((key.into(), ModelReply::new(text, usage)));
        self
    }

    /// Set the reply used when no keyed reply matches.
    pub fn with_default_reply(self, text: impl Into<String>, usage: TokenUsage) -> Self {
        *self.default_reply.write().unwrap() = Some(ModelReply::new(text, usage));
        self
    }

    /// Make every call fail with the given message.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        *self.failure.write().unwrap() = Some(message.into());
        self
    }

    /// Calls made so far.
    pub fn calls(&self) -> Vec<MockModelCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl CodeModel for MockModel {
    async fn generate(&self, system: &str, user: &str) -> Result<ModelReply> {
        self.calls.write().unwrap().push(MockModelCall {
            system: system.to_string(),
            user: user.to_string(),
        });

        if let Some(message) = self.failure.read().unwrap().clone() {
            return Err(CodegenError::Model(message.into()));
        }

        if let Some((_, reply)) = self
            .replies
            .read()
            .unwrap()
            .iter()
            .find(|(key, _)| user.contains(key.as_str()))
        {
            return Ok(reply.clone());
        }

        if let Some(reply) = self.default_reply.read().unwrap().clone() {
            return Ok(reply);
        }

        Ok(ModelReply::new("", TokenUsage::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_keyed_reply_and_call_tracking() {
        let model = MockModel::new().with_reply("login page", "FILE: ...", TokenUsage::new(5, 9));

        let reply = model.generate("system", "build a login page").await.unwrap();
        assert_eq!(reply.text, "FILE: ...");
        assert_eq!(reply.usage, TokenUsage::new(5, 9));

        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].user, "build a login page");
    }

    #[tokio::test]
    async fn test_failure_mode() {
        let model = MockModel::new().with_failure("rate limited");
        let err = model.generate("s", "u").await.unwrap_err();
        assert!(err.to_string().contains("rate limited"));
    }
}
