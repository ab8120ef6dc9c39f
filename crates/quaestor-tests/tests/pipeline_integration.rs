use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use quaestor_classify::TermClassifier;
use quaestor_core::error::Result;
use quaestor_core::store::{CompanyHolder, EntityStore, PersonHolding};
use quaestor_core::{Company, EntityRef, EntityType, Holding, HoldingStatus, Person};
use quaestor_graph::GraphAssembler;
use quaestor_search::{EntityResolver, SearchPipeline};

// ---------------------------------------------------------------------------
// In-memory store with the Postgres store's matching semantics:
// case-insensitive ticker equality, case-insensitive substring name
// match, ties broken by name then id ascending.
// ---------------------------------------------------------------------------

#[derive(Default)]
struct MemStore {
    people: Vec<Person>,
    companies: Vec<Company>,
    holdings: Vec<Holding>,
    attribute_fetches: AtomicUsize,
}

impl MemStore {
    fn first_by<T>(items: Vec<(&str, Uuid, T)>) -> Option<T> {
        items
            .into_iter()
            .min_by(|a, b| a.0.cmp(b.0).then(a.1.cmp(&b.1)))
            .map(|(_, _, item)| item)
    }
}

#[async_trait]
impl EntityStore for MemStore {
    async fn company_by_ticker(&self, ticker: &str) -> Result<Option<EntityRef>> {
        let candidates = self
            .companies
            .iter()
            .filter(|c| {
                c.ticker
                    .as_deref()
                    .is_some_and(|t| t.eq_ignore_ascii_case(ticker))
            })
            .map(|c| {
                (
                    c.name.as_str(),
                    c.id,
                    EntityRef {
                        id: c.id,
                        entity_type: EntityType::Company,
                        name: c.name.clone(),
                    },
                )
            })
            .collect();
        Ok(Self::first_by(candidates))
    }

    async fn company_by_name(&self, term: &str) -> Result<Option<EntityRef>> {
        let needle = term.to_lowercase();
        let candidates = self
            .companies
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .map(|c| {
                (
                    c.name.as_str(),
                    c.id,
                    EntityRef {
                        id: c.id,
                        entity_type: EntityType::Company,
                        name: c.name.clone(),
                    },
                )
            })
            .collect();
        Ok(Self::first_by(candidates))
    }

    async fn person_by_name(&self, term: &str) -> Result<Option<EntityRef>> {
        let needle = term.to_lowercase();
        let candidates = self
            .people
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .map(|p| {
                (
                    p.name.as_str(),
                    p.id,
                    EntityRef {
                        id: p.id,
                        entity_type: EntityType::Person,
                        name: p.name.clone(),
                    },
                )
            })
            .collect();
        Ok(Self::first_by(candidates))
    }

    async fn person(&self, id: Uuid) -> Result<Option<Person>> {
        self.attribute_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.people.iter().find(|p| p.id == id).cloned())
    }

    async fn company(&self, id: Uuid) -> Result<Option<Company>> {
        self.attribute_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.companies.iter().find(|c| c.id == id).cloned())
    }

    async fn holdings_of_person(&self, person_id: Uuid) -> Result<Vec<PersonHolding>> {
        Ok(self
            .holdings
            .iter()
            .filter(|h| h.person_id == person_id)
            .filter_map(|h| {
                let company = self.companies.iter().find(|c| c.id == h.company_id)?;
                Some(PersonHolding {
                    holding: h.clone(),
                    company: company.clone(),
                })
            })
            .collect())
    }

    async fn holders_of_company(&self, company_id: Uuid) -> Result<Vec<CompanyHolder>> {
        Ok(self
            .holdings
            .iter()
            .filter(|h| h.company_id == company_id)
            .filter_map(|h| {
                let person = self.people.iter().find(|p| p.id == h.person_id)?;
                Some(CompanyHolder {
                    holding: h.clone(),
                    person: person.clone(),
                })
            })
            .collect())
    }

    async fn person_count(&self) -> Result<u64> {
        Ok(self.people.len() as u64)
    }

    async fn company_count(&self) -> Result<u64> {
        Ok(self.companies.len() as u64)
    }

    async fn holding_count(&self) -> Result<u64> {
        Ok(self.holdings.len() as u64)
    }
}

// ---------------------------------------------------------------------------
// Fixture data
// ---------------------------------------------------------------------------

fn person(name: &str) -> Person {
    Person {
        id: Uuid::new_v4(),
        name: name.to_string(),
        role: "Senator".to_string(),
        state: "VT".to_string(),
        party_affiliation: "Independent".to_string(),
        estimated_net_worth: Some(Decimal::new(3_000_000, 0)),
        last_trade_date: None,
        tenure_start: None,
    }
}

fn company(name: &str, ticker: Option<&str>) -> Company {
    Company {
        id: Uuid::new_v4(),
        name: name.to_string(),
        ticker: ticker.map(str::to_string),
        image_url: None,
    }
}

fn holding(person_id: Uuid, company_id: Uuid, value: i64) -> Holding {
    Holding {
        id: Uuid::new_v4(),
        person_id,
        company_id,
        value: Some(Decimal::new(value, 0)),
        status: HoldingStatus::Active,
    }
}

/// Two officeholders, two companies; Jane holds Apple twice (separate
/// rows) and Globex once, John holds Apple once.
fn seeded_store() -> Arc<MemStore> {
    let jane = person("Jane Q. Public");
    let john = person("John Smith");
    let apple = company("Apple Inc.", Some("AAPL"));
    let globex = company("Globex Corporation", Some("GBX"));

    let holdings = vec![
        holding(jane.id, apple.id, 15_000),
        holding(jane.id, apple.id, 40_000),
        holding(jane.id, globex.id, 9_000),
        holding(john.id, apple.id, 22_000),
    ];

    Arc::new(MemStore {
        people: vec![jane, john],
        companies: vec![apple, globex],
        holdings,
        attribute_fetches: AtomicUsize::new(0),
    })
}

fn pipeline_over(store: Arc<MemStore>) -> SearchPipeline {
    SearchPipeline::new(
        TermClassifier::heuristic_only(),
        EntityResolver::new(store as Arc<dyn EntityStore>),
    )
}

// ---------------------------------------------------------------------------
// End-to-end scenarios
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ticker_search_then_graph_of_holders() {
    let store = seeded_store();
    let pipeline = pipeline_over(store.clone());

    let outcome = pipeline.search("AAPL").await.unwrap().expect("resolved");
    assert_eq!(outcome.entity_type, EntityType::Company);
    assert_eq!(outcome.name, "Apple Inc.");
    assert_eq!(outcome.confidence, 0.70);

    let assembler = GraphAssembler::new(store.clone() as Arc<dyn EntityStore>);
    let graph = assembler
        .build_graph(outcome.id, outcome.entity_type)
        .await
        .unwrap();

    // Center company + two distinct holders; three Apple holding rows
    // (two of Jane's, one of John's) become three edges.
    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.nodes[0].id, outcome.id);
    assert_eq!(graph.edges.len(), 3);
    for edge in &graph.edges {
        assert_eq!(edge.target, outcome.id);
    }
}

#[tokio::test]
async fn person_search_without_ai_then_graph_of_holdings() {
    let store = seeded_store();
    let pipeline = pipeline_over(store.clone());

    let outcome = pipeline
        .search("Jane Q. Public")
        .await
        .unwrap()
        .expect("resolved");
    assert_eq!(outcome.entity_type, EntityType::Person);
    // Middle-initial heuristic rule.
    assert_eq!(outcome.confidence, 0.80);

    let assembler = GraphAssembler::new(store.clone() as Arc<dyn EntityStore>);
    let graph = assembler
        .build_graph(outcome.id, outcome.entity_type)
        .await
        .unwrap();

    // Jane + one node per distinct company (Apple deduped), one edge
    // per holding row.
    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.nodes[0].id, outcome.id);
    assert_eq!(graph.edges.len(), 3);
    for edge in &graph.edges {
        assert_eq!(edge.source, outcome.id);
    }
}

#[tokio::test]
async fn unresolvable_term_short_circuits_before_graph_assembly() {
    let store = seeded_store();
    let pipeline = pipeline_over(store.clone());

    let outcome = pipeline.search("Zzyzx Nonexistent Corp").await.unwrap();
    assert!(outcome.is_none());

    // The pipeline resolves via lookups only; no entity attribute row
    // was ever fetched.
    assert_eq!(store.attribute_fetches.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn classification_type_directs_resolution() {
    let store = seeded_store();
    let pipeline = pipeline_over(store.clone());

    // "Smith Holdings" classifies as company (suffix rule) and must not
    // resolve to the person John Smith.
    let outcome = pipeline.search("Smith Holdings").await.unwrap();
    assert!(outcome.is_none());
}

#[tokio::test]
async fn name_ties_break_alphabetically() {
    // Storage order is Beta before Alpha; resolution must not depend
    // on it.
    let store = Arc::new(MemStore {
        people: Vec::new(),
        companies: vec![
            company("Beta Widgets", None),
            company("Alpha Widgets", None),
        ],
        holdings: Vec::new(),
        attribute_fetches: AtomicUsize::new(0),
    });
    let pipeline = pipeline_over(store);

    let outcome = pipeline.search("Widgets").await.unwrap().expect("resolved");
    assert_eq!(outcome.name, "Alpha Widgets");
}
