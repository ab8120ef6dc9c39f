use uuid::Uuid;

use quaestor_classify::TermClassifier;
use quaestor_core::entity::EntityType;
use quaestor_core::error::Result;
use quaestor_core::ClassificationResult;

use crate::resolver::EntityResolver;

/// What a successful search returns: the resolved identity, plus the
/// classifier's confidence and reasoning as advisory context. The
/// resolver's match decides the final type, not the classifier.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub id: Uuid,
    pub entity_type: EntityType,
    pub name: String,
    pub confidence: f64,
    pub reasoning: String,
}

/// The classify -> resolve orchestrator. Graph assembly is a separate
/// call the boundary makes only after a successful resolution.
pub struct SearchPipeline {
    classifier: TermClassifier,
    resolver: EntityResolver,
}

impl SearchPipeline {
    pub fn new(classifier: TermClassifier, resolver: EntityResolver) -> Self {
        Self {
            classifier,
            resolver,
        }
    }

    /// Classification without resolution, for the boundary's classify
    /// endpoint. Infallible.
    pub async fn classify(&self, term: &str) -> ClassificationResult {
        self.classifier.classify(term).await
    }

    pub async fn search(&self, term: &str) -> Result<Option<SearchOutcome>> {
        let classification = self.classifier.classify(term).await;

        tracing::info!(
            term,
            classified_as = %classification.entity_type,
            confidence = classification.confidence,
            "Classified search term"
        );

        let Some(entity) = self
            .resolver
            .resolve(term, Some(classification.entity_type))
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(SearchOutcome {
            id: entity.id,
            entity_type: entity.entity_type,
            name: entity.name,
            confidence: classification.confidence,
            reasoning: classification.reasoning,
        }))
    }
}
