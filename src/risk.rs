use crate::models::{ProfanityFinding, RiskLevel};

/// More PII findings than this makes a transcript high risk on its own
pub const PII_HIGH_RISK_COUNT: usize = 3;

/// Overall transcript risk.
///
/// High when there are more than [`PII_HIGH_RISK_COUNT`] PII findings or any
/// high-severity finding; medium when there is any PII; low otherwise.
pub fn aggregate_risk(pii_count: usize, findings: &[ProfanityFinding]) -> RiskLevel {
    let high_severity = findings.iter().any(|f| f.severity == RiskLevel::High);

    if pii_count > PII_HIGH_RISK_COUNT || high_severity {
        RiskLevel::High
    } else if pii_count > 0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
