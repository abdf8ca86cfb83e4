use serde::{Deserialize, Serialize};

use super::{
    FinancialEntity, NamedEntity, ObligationSentence, ProfanityFinding, RiskLevel, Span,
};

/// Per-transcript screening result. Built once by the screener, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Constant tag naming the processing layer
    pub layer: String,
    pub pii_detected: Vec<Span>,
    pub pii_count: usize,
    pub financial_entities: Vec<FinancialEntity>,
    pub named_entities: Vec<NamedEntity>,
    pub profanity_findings: Vec<ProfanityFinding>,
    pub obligation_sentences: Vec<ObligationSentence>,
    pub risk_level: RiskLevel,
}

impl Report {
    /// Number of high-severity profanity / prohibited-phrase findings
    pub fn high_severity_findings(&self) -> usize {
        self.profanity_findings
            .iter()
            .filter(|f| f.severity == RiskLevel::High)
            .count()
    }
}
