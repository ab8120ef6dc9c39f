use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Person,
    Company,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Person => "person",
            EntityType::Company => "company",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub state: String,
    pub party_affiliation: String,
    pub estimated_net_worth: Option<Decimal>,
    pub last_trade_date: Option<NaiveDate>,
    pub tenure_start: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub ticker: Option<String>,
    pub image_url: Option<String>,
}

/// A canonical record from the store, tagged by variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Entity {
    Person(Person),
    Company(Company),
}

impl Entity {
    pub fn id(&self) -> Uuid {
        match self {
            Entity::Person(p) => p.id,
            Entity::Company(c) => c.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entity::Person(p) => &p.name,
            Entity::Company(c) => &c.name,
        }
    }

    pub fn entity_type(&self) -> EntityType {
        match self {
            Entity::Person(_) => EntityType::Person,
            Entity::Company(_) => EntityType::Company,
        }
    }
}

/// Lightweight projection returned by resolution lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: Uuid,
    pub entity_type: EntityType,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HoldingStatus {
    #[default]
    Active,
    Sold,
}

/// A directed ownership relationship from one Person to one Company.
/// Duplicate (person, company) pairs are legal — each row stands alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub id: Uuid,
    pub person_id: Uuid,
    pub company_id: Uuid,
    pub value: Option<Decimal>,
    #[serde(default)]
    pub status: HoldingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_type_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&EntityType::Person).unwrap(),
            "\"person\""
        );
        assert_eq!(
            serde_json::to_string(&EntityType::Company).unwrap(),
            "\"company\""
        );
    }

    #[test]
    fn entity_accessors_follow_variant() {
        let company = Company {
            id: Uuid::new_v4(),
            name: "Initech".to_string(),
            ticker: Some("INTC".to_string()),
            image_url: None,
        };
        let entity = Entity::Company(company.clone());

        assert_eq!(entity.id(), company.id);
        assert_eq!(entity.name(), "Initech");
        assert_eq!(entity.entity_type(), EntityType::Company);
    }

    #[test]
    fn holding_status_defaults_to_active() {
        let json = serde_json::json!({
            "id": Uuid::new_v4(),
            "person_id": Uuid::new_v4(),
            "company_id": Uuid::new_v4(),
            "value": null,
        });

        let holding: Holding = serde_json::from_value(json).unwrap();
        assert_eq!(holding.status, HoldingStatus::Active);
    }
}
