use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::{Company, EntityType, Holding, HoldingStatus, Person};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    #[default]
    Holding,
}

/// Visualization projection of an Entity. Person and company attribute
/// sets are both present as optionals so one node shape serves the
/// whole graph payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_affiliation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_net_worth: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_trade_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl GraphNode {
    pub fn person(p: &Person) -> Self {
        Self {
            id: p.id,
            entity_type: EntityType::Person,
            name: p.name.clone(),
            role: Some(p.role.clone()),
            state: Some(p.state.clone()),
            party_affiliation: Some(p.party_affiliation.clone()),
            estimated_net_worth: p.estimated_net_worth,
            last_trade_date: p.last_trade_date,
            ticker: None,
            image_url: None,
        }
    }

    pub fn company(c: &Company) -> Self {
        Self {
            id: c.id,
            entity_type: EntityType::Company,
            name: c.name.clone(),
            role: None,
            state: None,
            party_affiliation: None,
            estimated_net_worth: None,
            last_trade_date: None,
            ticker: c.ticker.clone(),
            image_url: c.image_url.clone(),
        }
    }
}

/// One edge per holding row. Direction is always person -> company,
/// regardless of which side the graph is centered on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: Uuid,
    pub target: Uuid,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub status: HoldingStatus,
}

impl GraphEdge {
    /// The holding's fixed-point value is converted to floating point
    /// here and nowhere earlier; the edge list is the serialization
    /// boundary.
    pub fn holding(holding: &Holding) -> Self {
        Self {
            source: holding.person_id,
            target: holding.company_id,
            edge_type: EdgeType::Holding,
            value: holding.value.as_ref().and_then(Decimal::to_f64),
            label: Some("holding".to_string()),
            status: holding.status,
        }
    }
}

/// Assembled node/edge lists. An empty node list is the "entity not
/// found" signal; consumers rely on `nodes[0]` being the center.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}
