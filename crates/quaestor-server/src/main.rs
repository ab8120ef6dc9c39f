use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

mod handlers;
mod routes;
mod state;

use quaestor_core::EntityStore;
use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("quaestor=info".parse().unwrap()),
        )
        .init();

    let config = quaestor_core::AppConfig::from_env();
    let host = config.server_host.clone();
    let port = config.server_port;

    let pool = quaestor_store::connect(&config)
        .await
        .expect("Failed to connect to Postgres");
    let store = Arc::new(quaestor_store::PgEntityStore::new(pool));

    let classifier = quaestor_classify::TermClassifier::from_config(&config);
    let resolver =
        quaestor_search::EntityResolver::new(store.clone() as Arc<dyn EntityStore>);
    let pipeline = Arc::new(quaestor_search::SearchPipeline::new(classifier, resolver));
    let assembler = Arc::new(quaestor_graph::GraphAssembler::new(
        store.clone() as Arc<dyn EntityStore>,
    ));

    let state = AppState {
        config,
        store,
        pipeline,
        assembler,
    };

    let app = routes::create_router()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{host}:{port}");
    tracing::info!("Quaestor server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
