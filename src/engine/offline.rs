use async_trait::async_trait;

use crate::error::EngineError;
use crate::models::{NamedEntity, PiiType, RecognizerResult};

use super::EntityEngine;

/// Engine stand-in for regex-only runs: every recognition call fails, so the
/// statistical detector takes its regex fallback and NER yields nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineEngine;

#[async_trait]
impl EntityEngine for OfflineEngine {
    async fn analyze(
        &self,
        _text: &str,
        _entities: &[PiiType],
        _language: &str,
        _threshold: f64,
    ) -> Result<Vec<RecognizerResult>, EngineError> {
        Err(EngineError::Unavailable("offline mode".to_string()))
    }

    async fn named_entities(&self, _text: &str) -> Result<Vec<NamedEntity>, EngineError> {
        Err(EngineError::Unavailable("offline mode".to_string()))
    }
}
