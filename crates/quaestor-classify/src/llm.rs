use serde::{Deserialize, Serialize};

use quaestor_core::error::{QuaestorError, Result};
use quaestor_core::{ClassificationResult, EntityType};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const MODEL: &str = "claude-haiku-4-5-20251001";
const MAX_TOKENS: u32 = 200;

/// Single bounded attempt; the caller falls back to the heuristic on
/// timeout.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Person/company classification via the Anthropic Messages API.
/// Constructed only when a credential exists; every failure is
/// recoverable by the caller through the heuristic path.
pub struct LlmClassifier {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

// ── Anthropic Messages API request/response types ──────────────────────────

#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

// ── Intermediate JSON schema for LLM output parsing ────────────────────────

#[derive(Debug, Deserialize)]
struct RawClassification {
    #[serde(rename = "type")]
    entity_type: String,
    confidence: f64,
    reasoning: String,
}

// ── Implementation ─────────────────────────────────────────────────────────

impl LlmClassifier {
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("failed to build reqwest client");

        Self {
            client,
            api_key,
            model: MODEL.to_string(),
        }
    }

    fn build_prompt(term: &str) -> String {
        format!(
            r#"Analyze this search term and determine if it refers to a PERSON (politician/individual) or a COMPANY (corporation/organization).

Search term: "{term}"

Consider:
- Person names typically have 2-3 words (first, middle, last name)
- Company names often include words like "Inc", "Corp", "LLC", "Group", "Systems", etc.
- Stock tickers are usually 3-5 uppercase letters
- Political figures often have titles or are known by partial names

Respond with valid JSON only:
{{
    "type": "person" or "company",
    "confidence": 0.0-1.0,
    "reasoning": "brief explanation of your decision"
}}"#
        )
    }

    async fn call_anthropic(&self, term: &str) -> Result<String> {
        let request = AnthropicRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user".to_string(),
                content: Self::build_prompt(term),
            }],
        };

        tracing::debug!(model = %self.model, term, "Sending classification request to Anthropic API");

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| QuaestorError::Classification(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            return Err(QuaestorError::Classification(format!(
                "Anthropic API returned status {status}: {body}"
            )));
        }

        let api_response: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| QuaestorError::Classification(format!("Failed to parse API response: {e}")))?;

        let text = api_response
            .content
            .iter()
            .find_map(|block| {
                if block.block_type == "text" {
                    block.text.clone()
                } else {
                    None
                }
            })
            .ok_or_else(|| {
                QuaestorError::Classification("No text content block in API response".to_string())
            })?;

        tracing::debug!(
            stop_reason = ?api_response.stop_reason,
            response_len = text.len(),
            "Received classification response from Anthropic API"
        );

        Ok(text)
    }

    /// Parse the model's reply into a validated result. Rejects
    /// anything outside the person/company contract instead of
    /// guessing.
    fn parse_classification(raw: &str) -> Result<ClassificationResult> {
        // Strip potential markdown code fences the LLM might include
        // despite instructions
        let cleaned = raw.trim();
        let cleaned = if cleaned.starts_with("```") {
            let start = cleaned.find('{').unwrap_or(0);
            let end = cleaned.rfind('}').map(|i| i + 1).unwrap_or(cleaned.len());
            &cleaned[start..end]
        } else {
            cleaned
        };

        let output: RawClassification = serde_json::from_str(cleaned).map_err(|e| {
            tracing::debug!(raw = %cleaned, error = %e, "Failed to parse LLM classification JSON");
            QuaestorError::Classification(format!("Failed to parse LLM JSON output: {e}"))
        })?;

        let entity_type = match output.entity_type.to_lowercase().as_str() {
            "person" => EntityType::Person,
            "company" => EntityType::Company,
            other => {
                return Err(QuaestorError::Classification(format!(
                    "Invalid entity type from LLM: {other}"
                )));
            }
        };

        if !output.confidence.is_finite() {
            return Err(QuaestorError::Classification(
                "Non-finite confidence from LLM".to_string(),
            ));
        }

        Ok(ClassificationResult::new(
            entity_type,
            output.confidence,
            output.reasoning,
        ))
    }

    pub async fn classify(&self, term: &str) -> Result<ClassificationResult> {
        let raw = self.call_anthropic(term).await?;
        let result = Self::parse_classification(&raw)?;

        tracing::info!(
            term,
            entity_type = %result.entity_type,
            confidence = result.confidence,
            "LLM classification complete"
        );

        Ok(result)
    }
}
