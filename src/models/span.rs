use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::CharOffsets;

/// Category of a PII finding.
///
/// Upper-case names are the statistical engine's vocabulary (built-in and
/// custom recognizer categories); lower-case names come from the regex
/// pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PiiType {
    #[serde(rename = "PERSON")]
    Person,
    #[serde(rename = "EMAIL_ADDRESS")]
    EmailAddress,
    #[serde(rename = "PHONE_NUMBER")]
    PhoneNumber,
    #[serde(rename = "US_SSN")]
    UsSsn,
    #[serde(rename = "CREDIT_CARD")]
    CreditCard,
    #[serde(rename = "US_BANK_NUMBER")]
    UsBankNumber,
    #[serde(rename = "IP_ADDRESS")]
    IpAddress,
    #[serde(rename = "DATE_TIME")]
    DateTime,
    #[serde(rename = "LOCATION")]
    Location,
    #[serde(rename = "US_DRIVER_LICENSE")]
    UsDriverLicense,
    #[serde(rename = "US_PASSPORT")]
    UsPassport,
    #[serde(rename = "IBAN_CODE")]
    IbanCode,
    #[serde(rename = "NRP")]
    Nrp,
    #[serde(rename = "MEDICAL_LICENSE")]
    MedicalLicense,
    #[serde(rename = "URL")]
    Url,
    #[serde(rename = "REMOTE_ACCESS_CODE")]
    RemoteAccessCode,
    #[serde(rename = "SENSITIVE_NUMBER")]
    SensitiveNumber,
    #[serde(rename = "PHONE_NUMBER_EXTENDED")]
    PhoneNumberExtended,
    #[serde(rename = "INDIA_ID")]
    IndiaId,

    // Regex table categories
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "ssn")]
    Ssn,
    #[serde(rename = "credit_card")]
    CardNumber,
    #[serde(rename = "aadhaar")]
    Aadhaar,
    #[serde(rename = "pan")]
    Pan,
    #[serde(rename = "account_number")]
    AccountNumber,
    #[serde(rename = "phone_ru")]
    PhoneRu,
    #[serde(rename = "passport_ru")]
    PassportRu,
    #[serde(rename = "inn_ru")]
    InnRu,
    #[serde(rename = "snils_ru")]
    SnilsRu,
}

impl PiiType {
    /// Categories requested from the statistical engine (built-in plus custom)
    pub const ENGINE_ALLOW_LIST: [PiiType; 19] = [
        PiiType::Person,
        PiiType::EmailAddress,
        PiiType::PhoneNumber,
        PiiType::UsSsn,
        PiiType::CreditCard,
        PiiType::UsBankNumber,
        PiiType::IpAddress,
        PiiType::DateTime,
        PiiType::Location,
        PiiType::UsDriverLicense,
        PiiType::UsPassport,
        PiiType::IbanCode,
        PiiType::Nrp,
        PiiType::MedicalLicense,
        PiiType::Url,
        PiiType::RemoteAccessCode,
        PiiType::SensitiveNumber,
        PiiType::PhoneNumberExtended,
        PiiType::IndiaId,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PiiType::Person => "PERSON",
            PiiType::EmailAddress => "EMAIL_ADDRESS",
            PiiType::PhoneNumber => "PHONE_NUMBER",
            PiiType::UsSsn => "US_SSN",
            PiiType::CreditCard => "CREDIT_CARD",
            PiiType::UsBankNumber => "US_BANK_NUMBER",
            PiiType::IpAddress => "IP_ADDRESS",
            PiiType::DateTime => "DATE_TIME",
            PiiType::Location => "LOCATION",
            PiiType::UsDriverLicense => "US_DRIVER_LICENSE",
            PiiType::UsPassport => "US_PASSPORT",
            PiiType::IbanCode => "IBAN_CODE",
            PiiType::Nrp => "NRP",
            PiiType::MedicalLicense => "MEDICAL_LICENSE",
            PiiType::Url => "URL",
            PiiType::RemoteAccessCode => "REMOTE_ACCESS_CODE",
            PiiType::SensitiveNumber => "SENSITIVE_NUMBER",
            PiiType::PhoneNumberExtended => "PHONE_NUMBER_EXTENDED",
            PiiType::IndiaId => "INDIA_ID",
            PiiType::Phone => "phone",
            PiiType::Email => "email",
            PiiType::Ssn => "ssn",
            PiiType::CardNumber => "credit_card",
            PiiType::Aadhaar => "aadhaar",
            PiiType::Pan => "pan",
            PiiType::AccountNumber => "account_number",
            PiiType::PhoneRu => "phone_ru",
            PiiType::PassportRu => "passport_ru",
            PiiType::InnRu => "inn_ru",
            PiiType::SnilsRu => "snils_ru",
        }
    }

    /// Engine categories whose recognizers are exact patterns rather than models
    pub fn is_exact_pattern(&self) -> bool {
        matches!(
            self,
            PiiType::RemoteAccessCode | PiiType::IndiaId | PiiType::CreditCard | PiiType::UsSsn
        )
    }
}

impl fmt::Display for PiiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PiiType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALL: [PiiType; 30] = [
            PiiType::Person,
            PiiType::EmailAddress,
            PiiType::PhoneNumber,
            PiiType::UsSsn,
            PiiType::CreditCard,
            PiiType::UsBankNumber,
            PiiType::IpAddress,
            PiiType::DateTime,
            PiiType::Location,
            PiiType::UsDriverLicense,
            PiiType::UsPassport,
            PiiType::IbanCode,
            PiiType::Nrp,
            PiiType::MedicalLicense,
            PiiType::Url,
            PiiType::RemoteAccessCode,
            PiiType::SensitiveNumber,
            PiiType::PhoneNumberExtended,
            PiiType::IndiaId,
            PiiType::Phone,
            PiiType::Email,
            PiiType::Ssn,
            PiiType::CardNumber,
            PiiType::Aadhaar,
            PiiType::Pan,
            PiiType::AccountNumber,
            PiiType::PhoneRu,
            PiiType::PassportRu,
            PiiType::InnRu,
            PiiType::SnilsRu,
        ];

        ALL.into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown PII type: {}", s))
    }
}

/// Ordinal risk bucket, also used as finding severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bucket a calibrated confidence score
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.8 {
            RiskLevel::High
        } else if confidence >= 0.5 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => f.write_str("low"),
            RiskLevel::Medium => f.write_str("medium"),
            RiskLevel::High => f.write_str("high"),
        }
    }
}

/// Provenance of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectionMethod {
    /// Statistical engine plus post-processing
    #[serde(rename = "presidio")]
    Statistical,
    /// Legacy regex table
    #[serde(rename = "regex")]
    Regex,
}

/// Raw typed span from a recognizer, before post-processing.
///
/// Offsets are byte offsets into the analyzed text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecognizerResult {
    pub entity_type: PiiType,
    pub start: usize,
    pub end: usize,
    pub score: f64,
}

impl RecognizerResult {
    pub fn contained_in(&self, other: &RecognizerResult) -> bool {
        self.start >= other.start && self.end <= other.end
    }
}

/// A located PII finding within a source text
///
/// `start`/`end` are half-open character offsets into the source text, so
/// `value` is the `end - start` characters starting at character `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    #[serde(rename = "type")]
    pub entity_type: PiiType,
    pub value: String,
    pub start: usize,
    pub end: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub risk: RiskLevel,
    pub method: DetectionMethod,
}

impl Span {
    /// Length of the span in characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the span still points at its value inside `text`
    pub fn is_anchored_in(&self, text: &str) -> bool {
        CharOffsets::new(text).slice(text, self.start, self.end) == Some(self.value.as_str())
    }
}
