use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::ScreenConfig;
use crate::engine::{CharOffsets, EntityEngine};
use crate::error::EngineError;
use crate::heuristics::correct_result;
use crate::models::{PiiType, RecognizerResult, Span};
use crate::patterns::PatternLibrary;
use crate::recognizers::remove_contained;

use super::detect_pii_regex;

/// Detect PII with the statistical engine plus the custom recognizers,
/// post-processed by the corrector.
///
/// Engine and custom results are pooled and ranked the way the engine ranks
/// its own recognizers: highest score first, then earlier start, then longer
/// span. Results wholly inside a same-typed result are dropped, then exact
/// `(start, end)` duplicates of a different type; the best-ranked result
/// survives, ties keeping engine-then-registration order. Spans that only partially overlap are all kept. Output is sorted
/// by `start` and carries character offsets.
///
/// An engine result that does not slice `text` is an error, so callers fall
/// back the same way they do for transport failures.
pub async fn try_detect_pii(
    engine: &dyn EntityEngine,
    text: &str,
    library: &PatternLibrary,
    config: &ScreenConfig,
) -> Result<Vec<Span>, EngineError> {
    let mut raw = engine
        .analyze(
            text,
            &PiiType::ENGINE_ALLOW_LIST,
            &config.supported_language,
            config.score_threshold,
        )
        .await?;
    debug!("Engine returned {} raw results", raw.len());

    if let Some(bad) = raw
        .iter()
        .find(|r| r.start >= r.end || text.get(r.start..r.end).is_none())
    {
        return Err(EngineError::SpanOutOfBounds {
            start: bad.start,
            end: bad.end,
            len: text.len(),
        });
    }

    for recognizer in &library.recognizers {
        let results = recognizer.analyze(text, config.score_threshold);
        debug!("{} returned {} results", recognizer.name, results.len());
        raw.extend(results);
    }

    let offsets = CharOffsets::new(text);
    let mut findings: Vec<Span> = dedup_exact(remove_contained(raw))
        .iter()
        .filter_map(|result| correct_result(result, text, &offsets, library, config))
        .collect();

    findings.sort_by_key(|s| s.start);

    Ok(findings)
}

/// Detect PII, degrading to the regex detector if the engine fails
pub async fn detect_pii(
    engine: &dyn EntityEngine,
    text: &str,
    library: &PatternLibrary,
    config: &ScreenConfig,
) -> Vec<Span> {
    match try_detect_pii(engine, text, library, config).await {
        Ok(findings) => findings,
        Err(e) => {
            warn!("Statistical engine failed, falling back to regex: {}", e);
            detect_pii_regex(text, library)
        }
    }
}

/// Keep the first result at each exact `(start, end)`
fn dedup_exact(results: Vec<RecognizerResult>) -> Vec<RecognizerResult> {
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    results
        .into_iter()
        .filter(|r| seen.insert((r.start, r.end)))
        .collect()
}
