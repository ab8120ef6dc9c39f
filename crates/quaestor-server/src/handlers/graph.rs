use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use quaestor_core::api_types::GraphResponse;
use quaestor_core::EntityType;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GraphParams {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
}

/// GET /api/graph?id=&type= — the one-hop holdings graph around an
/// entity, nodes[0] being the center.
pub async fn graph(
    State(state): State<AppState>,
    Query(params): Query<GraphParams>,
) -> impl IntoResponse {
    info!(id = %params.id, entity_type = %params.entity_type, "Building entity graph");

    match state.assembler.build_graph(params.id, params.entity_type).await {
        Ok(graph) => match GraphResponse::from_graph(graph) {
            Some(response) => (StatusCode::OK, Json(response)).into_response(),
            None => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "Entity or graph not found" })),
            )
                .into_response(),
        },
        Err(e) => {
            error!(id = %params.id, "Graph assembly failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Graph assembly failed" })),
            )
                .into_response()
        }
    }
}
