use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{error, info};
use uuid::Uuid;

use quaestor_core::api_types::{CompanyHoldersResponse, CompanyResponse, HolderDetail};
use quaestor_core::EntityStore;

use crate::state::AppState;

/// GET /api/company/{id} — company metadata.
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    info!(%id, "Fetching company");

    match state.store.company(id).await {
        Ok(Some(company)) => {
            (StatusCode::OK, Json(CompanyResponse::from(company))).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("Company {id} not found") })),
        )
            .into_response(),
        Err(e) => {
            error!(%id, "Failed to fetch company: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Failed to fetch company" })),
            )
                .into_response()
        }
    }
}

/// GET /api/company/{id}/holders — officeholders with positions in the
/// company, largest first.
pub async fn get_company_holders(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    info!(%id, "Fetching company holders");

    let company = match state.store.company(id).await {
        Ok(Some(company)) => company,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": format!("Company {id} not found") })),
            )
                .into_response();
        }
        Err(e) => {
            error!(%id, "Failed to fetch company: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Failed to fetch company" })),
            )
                .into_response();
        }
    };

    match state.store.holders_of_company(company.id).await {
        Ok(rows) => {
            let response = CompanyHoldersResponse {
                company_id: company.id,
                holders: rows.into_iter().map(HolderDetail::from).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!(%id, "Failed to fetch holders: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Failed to fetch holders" })),
            )
                .into_response()
        }
    }
}
