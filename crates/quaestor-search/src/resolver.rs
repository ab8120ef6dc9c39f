use std::sync::Arc;

use quaestor_core::entity::{EntityRef, EntityType};
use quaestor_core::error::Result;
use quaestor_core::store::EntityStore;

/// Maps a search term to a canonical entity via a type-directed lookup
/// cascade. "No match" is a value, not an error; only store failures
/// propagate.
pub struct EntityResolver {
    store: Arc<dyn EntityStore>,
}

impl EntityResolver {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// With a type hint, only that type's strategies run. Without one,
    /// the company cascade is tried first, then the person lookup.
    pub async fn resolve(
        &self,
        term: &str,
        hint: Option<EntityType>,
    ) -> Result<Option<EntityRef>> {
        let resolved = match hint {
            Some(EntityType::Company) => self.resolve_company(term).await?,
            Some(EntityType::Person) => self.resolve_person(term).await?,
            None => match self.resolve_company(term).await? {
                Some(entity) => Some(entity),
                None => self.resolve_person(term).await?,
            },
        };

        match &resolved {
            Some(entity) => tracing::info!(
                term,
                id = %entity.id,
                entity_type = %entity.entity_type,
                name = %entity.name,
                "Resolved entity"
            ),
            None => tracing::info!(term, hint = ?hint, "No entity matched"),
        }

        Ok(resolved)
    }

    /// Exact ticker equality outranks the fuzzy name match.
    async fn resolve_company(&self, term: &str) -> Result<Option<EntityRef>> {
        if let Some(entity) = self.store.company_by_ticker(term).await? {
            return Ok(Some(entity));
        }
        self.store.company_by_name(term).await
    }

    async fn resolve_person(&self, term: &str) -> Result<Option<EntityRef>> {
        self.store.person_by_name(term).await
    }
}
