pub mod heuristic;
pub mod llm;

pub use llm::LlmClassifier;

use quaestor_core::{AppConfig, ClassificationResult};

/// Term classification with an optional AI capability. Whether the AI
/// path exists is decided once, at construction; `classify` itself
/// never fails.
pub struct TermClassifier {
    llm: Option<LlmClassifier>,
}

impl TermClassifier {
    pub fn from_config(config: &AppConfig) -> Self {
        let llm = if config.anthropic_api_key.is_empty() {
            tracing::info!("No Anthropic credential configured, classification is heuristic-only");
            None
        } else {
            Some(LlmClassifier::new(config.anthropic_api_key.clone()))
        };

        Self { llm }
    }

    pub fn heuristic_only() -> Self {
        Self { llm: None }
    }

    pub fn has_llm(&self) -> bool {
        self.llm.is_some()
    }

    pub async fn classify(&self, term: &str) -> ClassificationResult {
        let Some(llm) = &self.llm else {
            return heuristic::classify(term);
        };

        match llm.classify(term).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(term, error = %e, "LLM classification failed, falling back to heuristic");
                heuristic::classify(term)
            }
        }
    }
}
