use crate::error::PatternError;
use crate::models::PiiType;

use super::PatternRecognizer;

/// AnyDesk / TeamViewer style codes: 9-12 digits, dashed or continuous
pub fn remote_access_recognizer() -> Result<PatternRecognizer, PatternError> {
    PatternRecognizer::new(
        "RemoteAccessRecognizer",
        PiiType::RemoteAccessCode,
        &[
            ("remote_access_dashed", r"\b\d(?:[-.\s]\d){8,11}\b", 0.9),
            ("remote_access_continuous", r"\b\d{9,12}\b", 0.7),
        ],
    )
}

/// Anything shaped like an ID, code or account number
pub fn sensitive_number_recognizer() -> Result<PatternRecognizer, PatternError> {
    PatternRecognizer::new(
        "SensitiveNumberRecognizer",
        PiiType::SensitiveNumber,
        &[
            ("numeric_sequence_6_plus", r"\b\d{6,}\b", 0.5),
            (
                "formatted_numeric_code",
                r"\b\d{2,4}[-.\s]\d{2,4}[-.\s]\d{2,4}(?:[-.\s]\d{2,4})?\b",
                0.6,
            ),
        ],
    )
}

/// International and spoken ("call me ...") phone numbers
pub fn extended_phone_recognizer() -> Result<PatternRecognizer, PatternError> {
    PatternRecognizer::new(
        "ExtendedPhoneRecognizer",
        PiiType::PhoneNumberExtended,
        &[
            (
                "phone_intl",
                r"\+?\d{1,3}[-.\s]?\(?\d{2,4}\)?[-.\s]?\d{3,4}[-.\s]?\d{3,4}",
                0.85,
            ),
            (
                "phone_spoken",
                r"\b(?:call|phone|mobile|cell|contact)(?:\s+(?:me|us|at))?\s*:?\s*\+?\d[\d\s.-]{8,15}\b",
                0.9,
            ),
        ],
    )
}

/// Aadhaar (4-4-4 digits) and PAN
pub fn india_id_recognizer() -> Result<PatternRecognizer, PatternError> {
    PatternRecognizer::new(
        "IndiaIDRecognizer",
        PiiType::IndiaId,
        &[
            ("aadhaar", r"\b\d{4}[-.\s]?\d{4}[-.\s]?\d{4}\b", 0.85),
            ("pan_card", r"\b[A-Z]{5}\d{4}[A-Z]\b", 0.95),
        ],
    )
}

pub fn custom_recognizers() -> Result<Vec<PatternRecognizer>, PatternError> {
    Ok(vec![
        remote_access_recognizer()?,
        sensitive_number_recognizer()?,
        extended_phone_recognizer()?,
        india_id_recognizer()?,
    ])
}
