use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::{Company, EntityType, HoldingStatus, Person};
use crate::graph::{EntityGraph, GraphEdge, GraphNode};
use crate::store::{CompanyHolder, PersonHolding};

// --- Health ---

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database_connected: bool,
    pub person_count: u64,
    pub company_count: u64,
    pub holding_count: u64,
}

// --- Search ---

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub name: String,
    pub confidence: f64,
    pub reasoning: String,
}

// --- Graph ---

#[derive(Debug, Serialize, Deserialize)]
pub struct GraphResponse {
    pub center_id: Uuid,
    pub center_type: EntityType,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphResponse {
    /// Callers must only build a response from a non-empty graph; the
    /// center is `nodes[0]` by the assembler's ordering contract.
    pub fn from_graph(graph: EntityGraph) -> Option<Self> {
        let (center_id, center_type) = {
            let center = graph.nodes.first()?;
            (center.id, center.entity_type)
        };
        Some(Self {
            center_id,
            center_type,
            nodes: graph.nodes,
            edges: graph.edges,
        })
    }
}

// --- Person ---

#[derive(Debug, Serialize, Deserialize)]
pub struct PersonResponse {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub state: String,
    pub party_affiliation: String,
    pub estimated_net_worth: Option<Decimal>,
    pub last_trade_date: Option<NaiveDate>,
    pub tenure_start: Option<NaiveDate>,
}

impl From<Person> for PersonResponse {
    fn from(p: Person) -> Self {
        Self {
            id: p.id,
            name: p.name,
            role: p.role,
            state: p.state,
            party_affiliation: p.party_affiliation,
            estimated_net_worth: p.estimated_net_worth,
            last_trade_date: p.last_trade_date,
            tenure_start: p.tenure_start,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HoldingDetail {
    pub id: Uuid,
    pub company_id: Uuid,
    pub company_name: String,
    pub ticker: Option<String>,
    pub value: Option<Decimal>,
    pub status: HoldingStatus,
}

impl From<PersonHolding> for HoldingDetail {
    fn from(row: PersonHolding) -> Self {
        Self {
            id: row.holding.id,
            company_id: row.company.id,
            company_name: row.company.name,
            ticker: row.company.ticker,
            value: row.holding.value,
            status: row.holding.status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PersonHoldingsResponse {
    pub person_id: Uuid,
    pub holdings: Vec<HoldingDetail>,
}

// --- Company ---

#[derive(Debug, Serialize, Deserialize)]
pub struct CompanyResponse {
    pub id: Uuid,
    pub name: String,
    pub ticker: Option<String>,
    pub image_url: Option<String>,
}

impl From<Company> for CompanyResponse {
    fn from(c: Company) -> Self {
        Self {
            id: c.id,
            name: c.name,
            ticker: c.ticker,
            image_url: c.image_url,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HolderDetail {
    pub id: Uuid,
    pub person_id: Uuid,
    pub person_name: String,
    pub role: String,
    pub state: String,
    pub party_affiliation: String,
    pub value: Option<Decimal>,
    pub status: HoldingStatus,
}

impl From<CompanyHolder> for HolderDetail {
    fn from(row: CompanyHolder) -> Self {
        Self {
            id: row.holding.id,
            person_id: row.person.id,
            person_name: row.person.name,
            role: row.person.role,
            state: row.person.state,
            party_affiliation: row.person.party_affiliation,
            value: row.holding.value,
            status: row.holding.status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompanyHoldersResponse {
    pub company_id: Uuid,
    pub holders: Vec<HolderDetail>,
}
