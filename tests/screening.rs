use async_trait::async_trait;

use transcript_screen::heuristics::correct_entity_type;
use transcript_screen::models::{DetectionMethod, FindingKind, NerLabel, RecognizerResult};
use transcript_screen::{
    EngineError, EntityEngine, NamedEntity, OfflineEngine, PatternLibrary, PiiType, RiskLevel,
    ScreenConfig, Screener, detect_pii_regex, extract_obligations,
};

/// Engine that returns fixed results regardless of input
struct ScriptedEngine {
    results: Vec<RecognizerResult>,
    entities: Vec<NamedEntity>,
}

#[async_trait]
impl EntityEngine for ScriptedEngine {
    async fn analyze(
        &self,
        _text: &str,
        _entities: &[PiiType],
        _language: &str,
        threshold: f64,
    ) -> Result<Vec<RecognizerResult>, EngineError> {
        Ok(self
            .results
            .iter()
            .filter(|r| r.score >= threshold)
            .copied()
            .collect())
    }

    async fn named_entities(&self, _text: &str) -> Result<Vec<NamedEntity>, EngineError> {
        Ok(self.entities.clone())
    }
}

fn screener(engine: impl EntityEngine + 'static) -> Screener {
    Screener::new(
        Box::new(engine),
        PatternLibrary::new().unwrap(),
        ScreenConfig::default(),
    )
}

fn range_of(text: &str, needle: &str) -> (usize, usize) {
    let start = text.find(needle).unwrap();
    (start, start + needle.len())
}

fn char_range_of(text: &str, needle: &str) -> (usize, usize) {
    let start = text[..text.find(needle).unwrap()].chars().count();
    (start, start + needle.chars().count())
}

fn char_slice(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end - start).collect()
}

#[test]
fn regex_detector_finds_email_and_ssn() {
    let library = PatternLibrary::new().unwrap();
    let text = "My email is a@b.com and my SSN is 123-45-6789.";
    let spans = detect_pii_regex(text, &library);

    let email = spans.iter().find(|s| s.entity_type == PiiType::Email).unwrap();
    assert_eq!((email.start, email.end), range_of(text, "a@b.com"));

    let ssn = spans.iter().find(|s| s.entity_type == PiiType::Ssn).unwrap();
    assert_eq!((ssn.start, ssn.end), range_of(text, "123-45-6789"));
}

#[test]
fn context_correction_is_idempotent_for_person() {
    let library = PatternLibrary::new().unwrap();
    let text = "Hello, my name is John Smith.";
    let (start, end) = range_of(text, "John Smith");
    let value = &text[start..end];

    for reported in [PiiType::Person, PiiType::Location, PiiType::Nrp] {
        let corrected = correct_entity_type(value, reported, text, start, &library, 50);
        assert_eq!(corrected, PiiType::Person);
    }
}

#[tokio::test]
async fn statistical_pipeline_corrects_and_filters() {
    let text = "Hello, my name is John Smith. Install Zoom please.";
    let (name_start, name_end) = range_of(text, "John Smith");
    let (zoom_start, zoom_end) = range_of(text, "Zoom");

    let engine = ScriptedEngine {
        results: vec![
            RecognizerResult {
                entity_type: PiiType::Location,
                start: name_start,
                end: name_end,
                score: 0.85,
            },
            RecognizerResult {
                entity_type: PiiType::Person,
                start: zoom_start,
                end: zoom_end,
                score: 0.9,
            },
        ],
        entities: vec![NamedEntity {
            text: "John Smith".to_string(),
            label: NerLabel::Person,
            start: name_start,
            end: name_end,
        }],
    };

    let report = screener(engine).screen(text, "en").await;

    assert_eq!(report.pii_count, 1);
    let span = &report.pii_detected[0];
    assert_eq!(span.entity_type, PiiType::Person);
    assert_eq!(span.value, "John Smith");
    assert_eq!(span.confidence, Some(0.85));
    assert_eq!(span.risk, RiskLevel::High);
    assert_eq!(span.method, DetectionMethod::Statistical);

    assert_eq!(report.named_entities.len(), 1);
    assert_eq!(report.risk_level, RiskLevel::Medium);
}

#[tokio::test]
async fn named_entities_only_for_english() {
    let engine = ScriptedEngine {
        results: vec![],
        entities: vec![NamedEntity {
            text: "Иван".to_string(),
            label: NerLabel::Person,
            start: 0,
            end: "Иван".len(),
        }],
    };

    let report = screener(engine).screen("Иван звонил вчера.", "ru").await;
    assert!(report.named_entities.is_empty());
}

#[tokio::test]
async fn engine_failure_falls_back_to_regex() {
    let text = "My email is a@b.com and my SSN is 123-45-6789.";
    let report = screener(OfflineEngine).screen(text, "en").await;

    assert!(report.pii_count >= 2);
    assert!(report.pii_detected.iter().all(|s| s.method == DetectionMethod::Regex));
    assert!(report.pii_detected.iter().all(|s| s.confidence.is_none()));
    for span in &report.pii_detected {
        assert_eq!(&text[span.start..span.end], span.value);
    }
}

#[tokio::test]
async fn prohibited_phrases_raise_risk() {
    let text = "This payment is risk-free investment, guaranteed approval, zero fees.";
    let report = screener(OfflineEngine).screen(text, "en").await;

    let phrases: Vec<_> = report
        .profanity_findings
        .iter()
        .filter(|f| f.kind == FindingKind::ProhibitedPhrase)
        .collect();
    assert_eq!(phrases.len(), 3);
    assert!(phrases.iter().all(|f| f.severity == RiskLevel::High));

    assert_eq!(report.pii_count, 0);
    assert_eq!(report.risk_level, RiskLevel::High);
}

#[tokio::test]
async fn pii_count_boundary_between_medium_and_high() {
    let screener = screener(OfflineEngine);

    let three = screener.screen("Contacts: a@b.com, c@d.com, e@f.com", "en").await;
    assert_eq!(three.pii_count, 3);
    assert_eq!(three.risk_level, RiskLevel::Medium);

    let four = screener
        .screen("Contacts: a@b.com, c@d.com, e@f.com, g@h.com", "en")
        .await;
    assert_eq!(four.pii_count, 4);
    assert_eq!(four.risk_level, RiskLevel::High);
}

#[test]
fn obligation_sentence_lists_all_keywords() {
    let library = PatternLibrary::new().unwrap();
    let sentences = extract_obligations(&OfflineEngine, "You must pay within 30 days.", &library);

    assert_eq!(sentences.len(), 1);
    assert!(sentences[0].keywords.iter().any(|k| k == "must"));
    assert!(sentences[0].keywords.iter().any(|k| k == "within 30 days"));
}

#[test]
fn obligation_keywords_do_not_match_inside_words() {
    let library = PatternLibrary::new().unwrap();
    let sentences = extract_obligations(&OfflineEngine, "Продолжение разговора завтра.", &library);
    assert!(sentences.is_empty());
}

#[tokio::test]
async fn report_offsets_are_characters_for_cyrillic_text() {
    let text = "Сумма 50000 рублей. Звоните +7 (912) 345-67-89, zero fees.";
    let report = screener(OfflineEngine).screen(text, "ru").await;

    let phone = report
        .pii_detected
        .iter()
        .find(|s| s.entity_type == PiiType::PhoneRu)
        .unwrap();
    assert_eq!((phone.start, phone.end), char_range_of(text, "+7 (912) 345-67-89"));

    for span in &report.pii_detected {
        assert_eq!(char_slice(text, span.start, span.end), span.value);
    }
    for entity in &report.financial_entities {
        assert_eq!(char_slice(text, entity.start, entity.end), entity.value);
    }
    assert!(report.financial_entities.iter().any(|e| e.value == "50000 рублей"));
    for finding in &report.profanity_findings {
        assert_eq!(char_slice(text, finding.start, finding.end).to_lowercase(), finding.value);
    }
    assert_eq!(report.profanity_findings.len(), 1);

    let json = serde_json::to_value(&report).unwrap();
    let (phone_start, _) = char_range_of(text, "+7");
    assert!(
        json["pii_detected"]
            .as_array()
            .unwrap()
            .iter()
            .any(|s| s["start"] == phone_start)
    );
}
