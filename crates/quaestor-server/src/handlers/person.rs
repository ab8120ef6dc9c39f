use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{error, info};
use uuid::Uuid;

use quaestor_core::api_types::{HoldingDetail, PersonHoldingsResponse, PersonResponse};
use quaestor_core::EntityStore;

use crate::state::AppState;

/// GET /api/person/{id} — officeholder metadata.
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    info!(%id, "Fetching person");

    match state.store.person(id).await {
        Ok(Some(person)) => (StatusCode::OK, Json(PersonResponse::from(person))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("Person {id} not found") })),
        )
            .into_response(),
        Err(e) => {
            error!(%id, "Failed to fetch person: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Failed to fetch person" })),
            )
                .into_response()
        }
    }
}

/// GET /api/person/{id}/holdings — the person's holdings with company
/// details, largest first.
pub async fn get_person_holdings(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    info!(%id, "Fetching person holdings");

    let person = match state.store.person(id).await {
        Ok(Some(person)) => person,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": format!("Person {id} not found") })),
            )
                .into_response();
        }
        Err(e) => {
            error!(%id, "Failed to fetch person: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Failed to fetch person" })),
            )
                .into_response();
        }
    };

    match state.store.holdings_of_person(person.id).await {
        Ok(rows) => {
            let response = PersonHoldingsResponse {
                person_id: person.id,
                holdings: rows.into_iter().map(HoldingDetail::from).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!(%id, "Failed to fetch holdings: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Failed to fetch holdings" })),
            )
                .into_response()
        }
    }
}
