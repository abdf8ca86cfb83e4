use serde::Serialize;
use tracing::info;

use crate::config::ScreenConfig;
use crate::detectors::{detect_pii, detect_pii_regex, try_detect_pii};
use crate::engine::EntityEngine;
use crate::error::EngineError;
use crate::extractors::{
    detect_profanity, extract_financial_entities, extract_named_entities, extract_obligations,
};
use crate::models::{Report, Span};
use crate::patterns::PatternLibrary;
use crate::risk::aggregate_risk;

/// Runs every detector and extractor over a transcript and assembles the report
pub struct Screener {
    engine: Box<dyn EntityEngine>,
    library: PatternLibrary,
    config: ScreenConfig,
}

impl Screener {
    pub fn new(engine: Box<dyn EntityEngine>, library: PatternLibrary, config: ScreenConfig) -> Self {
        Self {
            engine,
            library,
            config,
        }
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    /// Screen one transcript.
    ///
    /// Engine failures never surface here: PII detection falls back to the
    /// regex detector and named entities come back empty.
    pub async fn screen(&self, transcript: &str, language: &str) -> Report {
        let engine = self.engine.as_ref();

        let (pii_detected, named_entities) = tokio::join!(
            detect_pii(engine, transcript, &self.library, &self.config),
            extract_named_entities(engine, transcript, language, &self.config),
        );
        let financial_entities = extract_financial_entities(transcript, &self.library);
        let profanity_findings = detect_profanity(transcript, &self.library);
        let obligation_sentences = extract_obligations(engine, transcript, &self.library);

        let pii_count = pii_detected.len();
        let risk_level = aggregate_risk(pii_count, &profanity_findings);

        info!(
            "Screened {} bytes: {} PII, {} financial, {} named, {} profanity, {} obligations, risk {}",
            transcript.len(),
            pii_count,
            financial_entities.len(),
            named_entities.len(),
            profanity_findings.len(),
            obligation_sentences.len(),
            risk_level
        );

        Report {
            layer: self.config.layer.clone(),
            pii_detected,
            pii_count,
            financial_entities,
            named_entities,
            profanity_findings,
            obligation_sentences,
            risk_level,
        }
    }

    /// Run both PII strategies over the same text without fallback
    pub async fn compare(&self, text: &str) -> Result<PiiComparison, EngineError> {
        let statistical = try_detect_pii(self.engine.as_ref(), text, &self.library, &self.config).await?;
        let regex = detect_pii_regex(text, &self.library);
        Ok(PiiComparison { regex, statistical })
    }
}

/// Regex and statistical PII findings for one text
#[derive(Debug, Clone, Serialize)]
pub struct PiiComparison {
    pub regex: Vec<Span>,
    pub statistical: Vec<Span>,
}

impl PiiComparison {
    /// Regex spans whose exact range the statistical detector did not report
    pub fn regex_only(&self) -> Vec<&Span> {
        self.regex
            .iter()
            .filter(|r| !self.statistical.iter().any(|s| s.start == r.start && s.end == r.end))
            .collect()
    }

    /// Statistical spans whose exact range the regex detector did not report
    pub fn statistical_only(&self) -> Vec<&Span> {
        self.statistical
            .iter()
            .filter(|s| !self.regex.iter().any(|r| r.start == s.start && r.end == s.end))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::OfflineEngine;
    use crate::models::{DetectionMethod, RiskLevel};

    fn offline_screener() -> Screener {
        Screener::new(
            Box::new(OfflineEngine),
            PatternLibrary::new().unwrap(),
            ScreenConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_screen_assembles_report() {
        let screener = offline_screener();
        let text = "My email is a@b.com. You must pay $500 within 30 days.";
        let report = screener.screen(text, "en").await;

        assert_eq!(report.layer, "text_processing");
        assert_eq!(report.pii_count, report.pii_detected.len());
        assert!(report.pii_detected.iter().all(|s| s.method == DetectionMethod::Regex));
        assert!(report.financial_entities.iter().any(|e| e.value == "$500"));
        assert!(report.named_entities.is_empty());
        assert_eq!(report.obligation_sentences.len(), 1);
        assert_eq!(report.risk_level, RiskLevel::Medium);
    }

    #[tokio::test]
    async fn test_clean_transcript_is_low_risk() {
        let screener = offline_screener();
        let report = screener.screen("Good morning, how are you today?", "en").await;

        assert_eq!(report.pii_count, 0);
        assert!(report.profanity_findings.is_empty());
        assert_eq!(report.risk_level, RiskLevel::Low);
    }

    #[tokio::test]
    async fn test_compare_surfaces_engine_failure() {
        let screener = offline_screener();
        assert!(screener.compare("a@b.com").await.is_err());
    }

    #[test]
    fn test_comparison_differences() {
        let library = PatternLibrary::new().unwrap();
        let text = "Mail a@b.com or call 555-123-4567";
        let regex = detect_pii_regex(text, &library);
        let statistical = vec![regex[0].clone()];
        let comparison = PiiComparison { regex, statistical };

        assert_eq!(comparison.statistical_only().len(), 0);
        assert_eq!(comparison.regex_only().len(), comparison.regex.len() - 1);
    }
}
