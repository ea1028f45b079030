//! Text provider abstractions and implementations.
//!
//! This module provides a trait-based abstraction for the suggestion model,
//! allowing easy swapping between the live Gemini backend and mocks.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::GeminiTextProvider;
pub use mock::{FailingTextProvider, MockTextProvider};

/// Error type for provider operations.
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    /// The endpoint could not be reached or answered with an outage status.
    #[error("service unreachable: {0}")]
    Unreachable(String),

    /// The credentials were rejected.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The configured model does not exist at the endpoint.
    #[error("invalid model: {0}")]
    InvalidModel(String),

    /// Anything else. `Display` is the bare description.
    #[error("{0}")]
    Unknown(String),
}

impl ProviderError {
    /// Stable label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::Unreachable(_) => "unreachable",
            ProviderError::Unauthorized(_) => "unauthorized",
            ProviderError::InvalidModel(_) => "invalid_model",
            ProviderError::Unknown(_) => "unknown",
        }
    }
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a text response for the prompt. Makes exactly one attempt;
    /// the caller decides what a failure means.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_displays_bare_description() {
        let error = ProviderError::Unknown("timeout".to_string());

        assert_eq!(error.to_string(), "timeout");
    }

    #[test]
    fn test_variants_display_their_description() {
        assert_eq!(
            ProviderError::Unreachable("connection refused".to_string()).to_string(),
            "service unreachable: connection refused"
        );
        assert_eq!(
            ProviderError::Unauthorized("token expired".to_string()).to_string(),
            "unauthorized: token expired"
        );
        assert_eq!(
            ProviderError::InvalidModel("gemini-0.5".to_string()).to_string(),
            "invalid model: gemini-0.5"
        );
    }

    #[test]
    fn test_kind_labels_are_stable() {
        assert_eq!(ProviderError::Unreachable(String::new()).kind(), "unreachable");
        assert_eq!(ProviderError::Unauthorized(String::new()).kind(), "unauthorized");
        assert_eq!(ProviderError::InvalidModel(String::new()).kind(), "invalid_model");
        assert_eq!(ProviderError::Unknown(String::new()).kind(), "unknown");
    }
}
