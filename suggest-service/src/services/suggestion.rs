//! Suggestion orchestration.
//!
//! Wraps the text provider with the prompt builder and the fallback policy:
//! a failed model call degrades to a canned suggestion instead of an error.

use crate::dtos::{SuggestRequest, SuggestResponse};
use crate::services::metrics;
use crate::services::prompt::build_prompt;
use crate::services::providers::TextProvider;
use std::sync::Arc;
use std::time::Instant;

/// Advice appended after the error note in every fallback suggestion.
const FALLBACK_ADVICE: &str = "Based on the data, focus more on subjects with \
     the lowest attendance percentage and plan extra study sessions for them.";

#[derive(Clone)]
pub struct SuggestionService {
    provider: Arc<dyn TextProvider>,
}

impl SuggestionService {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Build the prompt and make exactly one model call. Provider failures
    /// degrade to the fallback suggestion, so this always yields a response.
    pub async fn suggest(&self, request: &SuggestRequest) -> SuggestResponse {
        let prompt = build_prompt(&request.subjects);

        let started = Instant::now();
        let result = self.provider.generate(&prompt).await;
        metrics::record_provider_latency(started.elapsed().as_secs_f64());

        let suggestion = match result {
            Ok(text) => {
                metrics::record_suggest_request("model");
                text
            }
            Err(e) => {
                metrics::record_provider_error(e.kind());
                metrics::record_suggest_request("fallback");
                tracing::warn!(error = %e, "Model call failed, using fallback suggestion");
                format!("(Gemini error: {}) {}", e, FALLBACK_ADVICE)
            }
        };

        SuggestResponse { suggestion }
    }
}
