use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::info;

use quaestor_core::api_types::HealthResponse;
use quaestor_core::EntityStore;

use crate::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    info!("Health check requested");

    let (database_connected, person_count, company_count, holding_count) =
        match state.store.person_count().await {
            Ok(pc) => {
                let cc = state.store.company_count().await.unwrap_or(0);
                let hc = state.store.holding_count().await.unwrap_or(0);
                (true, pc, cc, hc)
            }
            Err(e) => {
                tracing::warn!("Database connectivity check failed: {e}");
                (false, 0, 0, 0)
            }
        };

    let status = if database_connected {
        "ok".to_string()
    } else {
        "degraded".to_string()
    };

    let response = HealthResponse {
        status,
        version: VERSION.to_string(),
        database_connected,
        person_count,
        company_count,
        holding_count,
    };

    (StatusCode::OK, Json(response))
}
