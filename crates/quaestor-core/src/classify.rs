use serde::{Deserialize, Serialize};

use crate::entity::EntityType;

/// Person-or-company verdict for a raw search term. Built fresh per
/// request and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub confidence: f64,
    pub reasoning: String,
}

impl ClassificationResult {
    pub fn new(entity_type: EntityType, confidence: f64, reasoning: impl Into<String>) -> Self {
        Self {
            entity_type,
            confidence: confidence.clamp(0.0, 1.0),
            reasoning: reasoning.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_clamped() {
        let high = ClassificationResult::new(EntityType::Person, 1.7, "test");
        assert_eq!(high.confidence, 1.0);

        let low = ClassificationResult::new(EntityType::Company, -0.2, "test");
        assert_eq!(low.confidence, 0.0);
    }

    #[test]
    fn serializes_type_field() {
        let result = ClassificationResult::new(EntityType::Company, 0.7, "ticker shape");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["type"], "company");
        assert_eq!(json["confidence"], 0.7);
        assert_eq!(json["reasoning"], "ticker shape");
    }
}
