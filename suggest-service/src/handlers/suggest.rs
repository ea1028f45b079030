use crate::dtos::{SuggestRequest, SuggestResponse};
use crate::startup::AppState;
use axum::{extract::State, Json};

/// Turn per-subject attendance stats into a study plan suggestion.
///
/// Always answers 200: a failed model call is reported inside the suggestion
/// text, not as an HTTP error.
pub async fn suggest_plan(
    State(state): State<AppState>,
    Json(request): Json<SuggestRequest>,
) -> Json<SuggestResponse> {
    tracing::debug!(subject_count = request.subjects.len(), "Building suggestion");

    Json(state.suggestion.suggest(&request).await)
}
