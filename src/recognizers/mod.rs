//! Pattern recognizers that emit the same typed spans as the statistical engine

pub mod custom;

pub use custom::*;

use regex::{Regex, RegexBuilder};

use crate::error::PatternError;
use crate::models::{PiiType, RecognizerResult};

/// One regex with the fixed score it contributes
#[derive(Debug, Clone)]
pub struct ScoredPattern {
    pub name: &'static str,
    pub regex: Regex,
    pub score: f64,
}

/// A named family of patterns that all report a single entity type
#[derive(Debug, Clone)]
pub struct PatternRecognizer {
    pub name: &'static str,
    pub entity_type: PiiType,
    pub patterns: Vec<ScoredPattern>,
}

impl PatternRecognizer {
    /// Build a recognizer from `(name, regex, score)` triples.
    ///
    /// Patterns are compiled case-insensitive, multi-line and dot-all.
    pub fn new(
        name: &'static str,
        entity_type: PiiType,
        patterns: &[(&'static str, &str, f64)],
    ) -> Result<Self, PatternError> {
        let patterns = patterns
            .iter()
            .map(|(pattern_name, pattern, score)| {
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .multi_line(true)
                    .dot_matches_new_line(true)
                    .build()
                    .map_err(|e| PatternError::new(*pattern_name, e))?;
                Ok(ScoredPattern {
                    name: *pattern_name,
                    regex,
                    score: *score,
                })
            })
            .collect::<Result<Vec<_>, PatternError>>()?;

        Ok(Self {
            name,
            entity_type,
            patterns,
        })
    }

    /// Run every pattern over `text` and keep results scoring at least `threshold`
    pub fn analyze(&self, text: &str, threshold: f64) -> Vec<RecognizerResult> {
        let raw: Vec<RecognizerResult> = self
            .patterns
            .iter()
            .flat_map(|pattern| {
                pattern.regex.find_iter(text).map(|m| RecognizerResult {
                    entity_type: self.entity_type,
                    start: m.start(),
                    end: m.end(),
                    score: pattern.score,
                })
            })
            .collect();

        remove_contained(raw)
            .into_iter()
            .filter(|r| r.score >= threshold)
            .collect()
    }
}

/// Drop results wholly contained in a same-typed result that scores at least as high.
///
/// Candidates are visited by descending score, then earlier start, then longer span.
pub fn remove_contained(mut results: Vec<RecognizerResult>) -> Vec<RecognizerResult> {
    results.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.start.cmp(&b.start))
            .then((b.end - b.start).cmp(&(a.end - a.start)))
    });

    let mut kept: Vec<RecognizerResult> = Vec::with_capacity(results.len());
    for result in results {
        if result.score <= 0.0 {
            continue;
        }
        let covered = kept
            .iter()
            .any(|k| k.entity_type == result.entity_type && result.contained_in(k));
        if !covered {
            kept.push(result);
        }
    }

    kept
}
