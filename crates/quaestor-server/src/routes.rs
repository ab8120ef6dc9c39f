use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        // Health
        .route("/api/health", get(handlers::health::health_check))
        // Search
        .route("/api/search", get(handlers::search::search))
        .route("/api/search/classify", get(handlers::search::classify))
        // Graph
        .route("/api/graph", get(handlers::graph::graph))
        // Person
        .route("/api/person/{id}", get(handlers::person::get_person))
        .route(
            "/api/person/{id}/holdings",
            get(handlers::person::get_person_holdings),
        )
        // Company
        .route("/api/company/{id}", get(handlers::company::get_company))
        .route(
            "/api/company/{id}/holders",
            get(handlers::company::get_company_holders),
        )
}
