use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use quaestor_core::entity::{Company, Entity, EntityType, Person};
use quaestor_core::error::Result;
use quaestor_core::graph::{EntityGraph, GraphEdge, GraphNode};
use quaestor_core::store::EntityStore;

/// Builds the one-hop holdings graph around a resolved entity.
pub struct GraphAssembler {
    store: Arc<dyn EntityStore>,
}

impl GraphAssembler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Assemble nodes and edges centered on `id`. An unknown id yields
    /// an empty graph, never a partial one. The center is always
    /// `nodes[0]`; counterpart nodes are deduplicated by id while an
    /// edge is kept for every holding row.
    pub async fn build_graph(&self, id: Uuid, entity_type: EntityType) -> Result<EntityGraph> {
        let Some(center) = self.store.entity(id, entity_type).await? else {
            tracing::debug!(center_id = %id, center_type = %entity_type, "Center entity not found");
            return Ok(EntityGraph::default());
        };

        let graph = match center {
            Entity::Person(person) => self.around_person(person).await?,
            Entity::Company(company) => self.around_company(company).await?,
        };

        tracing::debug!(
            center_id = %id,
            center_type = %entity_type,
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "Assembled entity graph"
        );

        Ok(graph)
    }

    async fn around_person(&self, person: Person) -> Result<EntityGraph> {
        let mut nodes = vec![GraphNode::person(&person)];
        let mut seen: HashSet<Uuid> = HashSet::from([person.id]);
        let mut edges = Vec::new();

        for row in self.store.holdings_of_person(person.id).await? {
            if seen.insert(row.company.id) {
                nodes.push(GraphNode::company(&row.company));
            }
            edges.push(GraphEdge::holding(&row.holding));
        }

        Ok(EntityGraph { nodes, edges })
    }

    async fn around_company(&self, company: Company) -> Result<EntityGraph> {
        let mut nodes = vec![GraphNode::company(&company)];
        let mut seen: HashSet<Uuid> = HashSet::from([company.id]);
        let mut edges = Vec::new();

        for row in self.store.holders_of_company(company.id).await? {
            if seen.insert(row.person.id) {
                nodes.push(GraphNode::person(&row.person));
            }
            // Direction stays person -> company even with the company
            // at the center.
            edges.push(GraphEdge::holding(&row.holding));
        }

        Ok(EntityGraph { nodes, edges })
    }
}
