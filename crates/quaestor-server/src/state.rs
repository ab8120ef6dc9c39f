use std::sync::Arc;

use quaestor_core::AppConfig;
use quaestor_graph::GraphAssembler;
use quaestor_search::SearchPipeline;
use quaestor_store::PgEntityStore;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<PgEntityStore>,
    pub pipeline: Arc<SearchPipeline>,
    pub assembler: Arc<GraphAssembler>,
}
