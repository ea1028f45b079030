//! Mock provider implementations for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;

/// Mock text provider for tests and deployments without Gemini access.
pub struct MockTextProvider {
    enabled: bool,
    reply: Option<String>,
}

impl MockTextProvider {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            reply: None,
        }
    }

    /// Mock that answers every prompt with the given reply.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            enabled: true,
            reply: Some(reply.into()),
        }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::Unreachable(
                "Mock text provider not enabled".to_string(),
            ));
        }

        // Simulate some processing
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(match &self.reply {
            Some(reply) => reply.clone(),
            None => format!("Mock response for: {}", prompt),
        })
    }
}

/// Provider that fails every call with a fixed error.
pub struct FailingTextProvider {
    error: ProviderError,
}

impl FailingTextProvider {
    pub fn new(error: ProviderError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl TextProvider for FailingTextProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        Err(self.error.clone())
    }
}
