pub mod api_types;
pub mod classify;
pub mod config;
pub mod entity;
pub mod error;
pub mod graph;
pub mod store;

pub use classify::ClassificationResult;
pub use config::AppConfig;
pub use entity::{Company, Entity, EntityRef, EntityType, Holding, HoldingStatus, Person};
pub use error::{QuaestorError, Result};
pub use graph::{EdgeType, EntityGraph, GraphEdge, GraphNode};
pub use store::{CompanyHolder, EntityStore, PersonHolding};
