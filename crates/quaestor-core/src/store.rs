use async_trait::async_trait;
use uuid::Uuid;

use crate::entity::{Company, Entity, EntityRef, EntityType, Holding, Person};
use crate::error::Result;

/// A holding row joined with the company on its far side.
#[derive(Debug, Clone)]
pub struct PersonHolding {
    pub holding: Holding,
    pub company: Company,
}

/// A holding row joined with the officeholder on its near side.
#[derive(Debug, Clone)]
pub struct CompanyHolder {
    pub holding: Holding,
    pub person: Person,
}

/// Read-only access to the canonical entity store. Lookup methods
/// return at most one row under a deterministic ordering (name
/// ascending, then id ascending).
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn company_by_ticker(&self, ticker: &str) -> Result<Option<EntityRef>>;
    async fn company_by_name(&self, term: &str) -> Result<Option<EntityRef>>;
    async fn person_by_name(&self, term: &str) -> Result<Option<EntityRef>>;

    async fn person(&self, id: Uuid) -> Result<Option<Person>>;
    async fn company(&self, id: Uuid) -> Result<Option<Company>>;

    /// Typed fetch of the full entity row behind an identifier.
    async fn entity(&self, id: Uuid, entity_type: EntityType) -> Result<Option<Entity>> {
        Ok(match entity_type {
            EntityType::Person => self.person(id).await?.map(Entity::Person),
            EntityType::Company => self.company(id).await?.map(Entity::Company),
        })
    }

    /// All holdings of one person, company attached, ordered by value
    /// descending with nulls last.
    async fn holdings_of_person(&self, person_id: Uuid) -> Result<Vec<PersonHolding>>;

    /// All holders of one company, person attached, ordered by value
    /// descending with nulls last.
    async fn holders_of_company(&self, company_id: Uuid) -> Result<Vec<CompanyHolder>>;

    async fn person_count(&self) -> Result<u64>;
    async fn company_count(&self) -> Result<u64>;
    async fn holding_count(&self) -> Result<u64>;
}
