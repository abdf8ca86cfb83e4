pub mod confidence;
pub mod filter;
pub mod type_correction;

pub use confidence::*;
pub use filter::*;
pub use type_correction::*;

use tracing::debug;

use crate::config::ScreenConfig;
use crate::engine::CharOffsets;
use crate::models::{DetectionMethod, RecognizerResult, RiskLevel, Span};
use crate::patterns::PatternLibrary;

/// Post-process one raw engine result into a finding
///
/// 1. Drop known false positives
/// 2. Correct the entity type from the value and preceding context
/// 3. Recalibrate the confidence and drop it if it falls below the threshold
///
/// `result` carries byte offsets; the returned span carries character offsets
/// from `offsets`. A result that does not slice `text` is dropped.
pub fn correct_result(
    result: &RecognizerResult,
    text: &str,
    offsets: &CharOffsets,
    library: &PatternLibrary,
    config: &ScreenConfig,
) -> Option<Span> {
    let Some(value) = text.get(result.start..result.end) else {
        debug!(
            "Dropped {} at {}..{}: not a slice of the text",
            result.entity_type, result.start, result.end
        );
        return None;
    };

    if should_filter(value, result.entity_type, library) {
        debug!("Filtered {} {:?}", result.entity_type, value);
        return None;
    }

    let entity_type = correct_entity_type(
        value,
        result.entity_type,
        text,
        result.start,
        library,
        config.context_window_chars,
    );
    if entity_type != result.entity_type {
        debug!("Reclassified {:?}: {} -> {}", value, result.entity_type, entity_type);
    }

    let confidence = calibrate(&ScoringContext::new(
        result.entity_type,
        value,
        result.score,
        library,
    ));
    if confidence < config.score_threshold {
        debug!(
            "Dropped {} {:?}: confidence {} below {}",
            entity_type, value, confidence, config.score_threshold
        );
        return None;
    }

    let (start, end) = offsets.to_chars(result.start, result.end);
    Some(Span {
        entity_type,
        value: value.to_string(),
        start,
        end,
        confidence: Some(confidence),
        risk: RiskLevel::from_confidence(confidence),
        method: DetectionMethod::Statistical,
    })
}
