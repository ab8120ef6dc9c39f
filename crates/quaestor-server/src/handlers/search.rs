use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::{error, info};

use quaestor_core::api_types::SearchResponse;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}

/// GET /api/search?q= — classify the term, resolve it against the
/// store, and return the canonical identity.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    info!(q = %params.q, "Searching entities");

    match state.pipeline.search(&params.q).await {
        Ok(Some(outcome)) => {
            let response = SearchResponse {
                id: outcome.id,
                entity_type: outcome.entity_type,
                name: outcome.name,
                confidence: outcome.confidence,
                reasoning: outcome.reasoning,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Entity not found" })),
        )
            .into_response(),
        Err(e) => {
            error!(q = %params.q, "Search failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Search failed" })),
            )
                .into_response()
        }
    }
}

/// GET /api/search/classify?q= — classification only, no store lookup.
/// Always succeeds.
pub async fn classify(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    info!(q = %params.q, "Classifying search term");

    let result = state.pipeline.classify(&params.q).await;
    (StatusCode::OK, Json(result))
}
