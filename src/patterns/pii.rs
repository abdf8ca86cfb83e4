//! Regex table for the legacy PII detector

use crate::models::PiiType;

/// PII patterns, applied independently of each other.
///
/// Latin-script and South-Asian formats first, then Russian document formats.
pub const PII_PATTERNS: &[(PiiType, &str)] = &[
    (
        PiiType::Phone,
        r"\b(?:\+?1[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b",
    ),
    (
        PiiType::Email,
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b",
    ),
    (PiiType::Ssn, r"\b\d{3}[-.\s]?\d{2}[-.\s]?\d{4}\b"),
    (PiiType::CardNumber, r"\b(?:\d{4}[-.\s]?){3}\d{4}\b"),
    (PiiType::Aadhaar, r"\b\d{4}[-.\s]?\d{4}[-.\s]?\d{4}\b"),
    (PiiType::Pan, r"\b[A-Z]{5}\d{4}[A-Z]\b"),
    (
        PiiType::AccountNumber,
        r"(?i)\b(?:a/?c|account)\s*(?:no\.?|number|#)?\s*:?\s*\d{9,18}\b",
    ),
    // Russian
    (
        PiiType::PhoneRu,
        r"\+?7[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{2}[-.\s]?\d{2}",
    ),
    (PiiType::PassportRu, r"\b\d{4}\s?\d{6}\b"),
    (PiiType::InnRu, r"\b\d{10}(?:\d{2})?\b"),
    (PiiType::SnilsRu, r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{3}[-.\s]?\d{2}\b"),
];
