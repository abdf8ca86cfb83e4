use tracing::warn;

use crate::config::ScreenConfig;
use crate::engine::{CharOffsets, EntityEngine};
use crate::models::NamedEntity;

/// General named entities from the engine, for the supported language only.
///
/// Other languages, and an engine without entity support, yield no entities.
/// The engine's byte offsets are reported as character offsets.
pub async fn extract_named_entities(
    engine: &dyn EntityEngine,
    text: &str,
    language: &str,
    config: &ScreenConfig,
) -> Vec<NamedEntity> {
    if !config.supports_language(language) {
        return Vec::new();
    }

    match engine.named_entities(text).await {
        Ok(entities) => {
            let offsets = CharOffsets::new(text);
            entities
                .into_iter()
                .map(|entity| {
                    let (start, end) = offsets.to_chars(entity.start, entity.end);
                    NamedEntity { start, end, ..entity }
                })
                .collect()
        }
        Err(e) => {
            warn!("Named entity extraction unavailable: {}", e);
            Vec::new()
        }
    }
}
