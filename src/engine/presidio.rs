use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineError;
use crate::models::{NamedEntity, NerLabel, PiiType, RecognizerResult};

use super::{CharOffsets, EntityEngine};

/// Configuration for the Presidio analyzer and spaCy entity services
#[derive(Debug, Clone)]
pub struct PresidioConfig {
    /// Analyzer base URL (from PRESIDIO_ANALYZER_URL)
    pub analyzer_url: String,
    /// Entity service base URL (from SPACY_NER_URL); general NER is off without it
    pub ner_url: Option<String>,
    /// Model name passed to the entity service
    pub ner_model: String,
}

impl PresidioConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self {
            analyzer_url: std::env::var("PRESIDIO_ANALYZER_URL")
                .unwrap_or_else(|_| "http://localhost:5002".to_string()),
            ner_url: std::env::var("SPACY_NER_URL").ok().filter(|u| !u.is_empty()),
            ner_model: std::env::var("SPACY_MODEL")
                .unwrap_or_else(|_| "en_core_web_sm".to_string()),
        }
    }

    pub fn new(analyzer_url: String) -> Self {
        Self {
            analyzer_url,
            ner_url: None,
            ner_model: "en_core_web_sm".to_string(),
        }
    }
}

/// HTTP client for a Presidio analyzer deployment.
///
/// Requests are sent once: no retry and no timeout beyond the transport's own.
pub struct PresidioEngine {
    client: Client,
    config: PresidioConfig,
}

impl PresidioEngine {
    pub fn new(config: PresidioConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &PresidioConfig {
        &self.config
    }

    async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        url: String,
        body: &B,
    ) -> Result<R, EngineError> {
        let response = self.client.post(url).json(body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::Status { status, body });
        }

        response
            .json()
            .await
            .map_err(|e| EngineError::Decode(e.to_string()))
    }
}

#[async_trait]
impl EntityEngine for PresidioEngine {
    async fn analyze(
        &self,
        text: &str,
        entities: &[PiiType],
        language: &str,
        threshold: f64,
    ) -> Result<Vec<RecognizerResult>, EngineError> {
        let request = AnalyzeRequest {
            text,
            language,
            entities: entities.iter().map(|e| e.as_str()).collect(),
            score_threshold: threshold,
        };
        let url = format!("{}/analyze", self.config.analyzer_url.trim_end_matches('/'));
        let results: Vec<AnalyzerResult> = self.post(url, &request).await?;

        convert_analyzer_results(text, results)
    }

    async fn named_entities(&self, text: &str) -> Result<Vec<NamedEntity>, EngineError> {
        let Some(ner_url) = &self.config.ner_url else {
            return Err(EngineError::Unavailable(
                "no entity service configured (SPACY_NER_URL)".to_string(),
            ));
        };

        let request = EntRequest {
            text,
            model: &self.config.ner_model,
        };
        let url = format!("{}/ent", ner_url.trim_end_matches('/'));
        let results: Vec<EntResult> = self.post(url, &request).await?;

        convert_ent_results(text, results)
    }
}

/// Convert analyzer output (character offsets, string types) into typed byte spans
fn convert_analyzer_results(
    text: &str,
    results: Vec<AnalyzerResult>,
) -> Result<Vec<RecognizerResult>, EngineError> {
    let offsets = CharOffsets::new(text);
    let mut converted = Vec::with_capacity(results.len());

    for result in results {
        let Ok(entity_type) = result.entity_type.parse::<PiiType>() else {
            debug!("Ignoring unknown entity type {}", result.entity_type);
            continue;
        };
        let (start, end) = offsets.to_bytes(result.start, result.end)?;
        converted.push(RecognizerResult {
            entity_type,
            start,
            end,
            score: result.score,
        });
    }

    Ok(converted)
}

fn convert_ent_results(text: &str, results: Vec<EntResult>) -> Result<Vec<NamedEntity>, EngineError> {
    let offsets = CharOffsets::new(text);
    let mut converted = Vec::new();

    for result in results {
        let Ok(label) = result.label.parse::<NerLabel>() else {
            continue;
        };
        let (start, end) = offsets.to_bytes(result.start, result.end)?;
        converted.push(NamedEntity {
            text: text[start..end].to_string(),
            label,
            start,
            end,
        });
    }

    Ok(converted)
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
    language: &'a str,
    entities: Vec<&'static str>,
    score_threshold: f64,
}

#[derive(Debug, Deserialize)]
struct AnalyzerResult {
    entity_type: String,
    start: usize,
    end: usize,
    score: f64,
}

#[derive(Debug, Serialize)]
struct EntRequest<'a> {
    text: &'a str,
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct EntResult {
    start: usize,
    end: usize,
    #[serde(rename = "type")]
    label: String,
}
