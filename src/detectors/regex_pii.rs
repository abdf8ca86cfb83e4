use crate::engine::CharOffsets;
use crate::models::{DetectionMethod, RiskLevel, Span};
use crate::patterns::PatternLibrary;

/// Detect PII with the regex table alone.
///
/// Each pattern runs independently over the whole text, so a value matching
/// several patterns (e.g. SSN and phone) yields one span per pattern.
pub fn detect_pii_regex(text: &str, library: &PatternLibrary) -> Vec<Span> {
    let offsets = CharOffsets::new(text);
    let mut findings = Vec::new();

    for (pii_type, regex) in &library.pii {
        for m in regex.find_iter(text) {
            let (start, end) = offsets.to_chars(m.start(), m.end());
            findings.push(Span {
                entity_type: *pii_type,
                value: m.as_str().to_string(),
                start,
                end,
                confidence: None,
                risk: RiskLevel::High,
                method: DetectionMethod::Regex,
            });
        }
    }

    findings
}
