use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// Category of a financial pattern match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialType {
    /// English / South-Asian currency notation
    CurrencyAmount,
    /// Cyrillic rouble, dollar and euro phrasing
    CurrencyRub,
    Percentage,
    DateReference,
    LoanTerm,
}

/// A financial figure located by the pattern table. Matches are treated as certain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialEntity {
    #[serde(rename = "type")]
    pub entity_type: FinancialType,
    pub value: String,
    pub start: usize,
    pub end: usize,
}

/// General named-entity categories passed through from the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NerLabel {
    Person,
    Org,
    Gpe,
    Money,
    Date,
    Cardinal,
    Percent,
}

impl FromStr for NerLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PERSON" => Ok(NerLabel::Person),
            "ORG" => Ok(NerLabel::Org),
            "GPE" => Ok(NerLabel::Gpe),
            "MONEY" => Ok(NerLabel::Money),
            "DATE" => Ok(NerLabel::Date),
            "CARDINAL" => Ok(NerLabel::Cardinal),
            "PERCENT" => Ok(NerLabel::Percent),
            other => Err(format!("label not in allow-list: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    pub text: String,
    pub label: NerLabel,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    ProhibitedPhrase,
    Profanity,
}

/// A prohibited phrase or profane word.
///
/// Both kinds carry their position in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfanityFinding {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    /// Canonical (lowercase) phrase or word that matched
    pub value: String,
    pub start: usize,
    pub end: usize,
    pub severity: RiskLevel,
}

impl ProfanityFinding {
    pub fn prohibited_phrase(value: &str, start: usize, end: usize) -> Self {
        Self {
            kind: FindingKind::ProhibitedPhrase,
            value: value.to_string(),
            start,
            end,
            severity: RiskLevel::High,
        }
    }

    pub fn profanity(value: &str, start: usize, end: usize) -> Self {
        Self {
            kind: FindingKind::Profanity,
            value: value.to_string(),
            start,
            end,
            severity: RiskLevel::Medium,
        }
    }
}

/// A sentence that contains at least one obligation keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObligationSentence {
    pub sentence: String,
    /// Matched keywords in keyword-table order
    pub keywords: Vec<String>,
    pub start: usize,
    pub end: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ner_label_allow_list() {
        assert_eq!("GPE".parse::<NerLabel>().unwrap(), NerLabel::Gpe);
        assert!("NORP".parse::<NerLabel>().is_err());
        assert!("LOC".parse::<NerLabel>().is_err());
    }

    #[test]
    fn test_finding_constructors_set_severity() {
        let phrase = ProfanityFinding::prohibited_phrase("zero fees", 3, 12);
        assert_eq!(phrase.severity, RiskLevel::High);
        assert_eq!(phrase.kind, FindingKind::ProhibitedPhrase);

        let word = ProfanityFinding::profanity("damn", 0, 4);
        assert_eq!(word.severity, RiskLevel::Medium);

        let json = serde_json::to_value(&word).unwrap();
        assert_eq!(json["type"], "profanity");
        assert_eq!(json["severity"], "medium");
    }
}
