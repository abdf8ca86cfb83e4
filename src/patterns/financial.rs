//! Regex table for financial figures (English, South-Asian and Russian phrasing)

use crate::models::FinancialType;

/// Financial patterns. All are compiled case-insensitive.
pub const FINANCIAL_PATTERNS: &[(FinancialType, &str)] = &[
    (
        FinancialType::CurrencyAmount,
        concat!(
            r"(?:(?:Rs\.?|INR|USD|\$|€|£|₹)\s*\d[\d,]*(?:\.\d{1,2})?)",
            r"|(?:\d[\d,]*(?:\.\d{1,2})?\s*(?:rupees|dollars|euros|pounds|lakhs?|crores?|thousand|hundred))",
        ),
    ),
    (
        FinancialType::CurrencyRub,
        concat!(
            r"(?:\d[\d\s,]*(?:[.,]\d{1,2})?\s*(?:рублей|руб\.?|₽))",
            r"|(?:\d[\d\s,]*(?:[.,]\d{1,2})?\s*(?:тысяч|миллион(?:ов|а)?|млн)\s*(?:рублей|долларов|евро)?)",
            r"|(?:\d[\d\s,]*(?:[.,]\d{1,2})?\s*(?:долларов|евро))",
        ),
    ),
    (
        FinancialType::Percentage,
        r"\b\d+(?:[.,]\d+)?\s*(?:%|percent|per\s*cent|процент(?:ов|а)?)\b",
    ),
    (
        FinancialType::DateReference,
        concat!(
            r"\b(?:\d{1,2}[/-]\d{1,2}[/-]\d{2,4})",
            r"|(?:(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{1,2},?\s*\d{2,4})",
            r"|(?:\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{2,4})",
            r"|(?:\d{1,2}\s+(?:января|февраля|марта|апреля|мая|июня|июля|августа|сентября|октября|ноября|декабря)\s*\d{2,4}?)",
        ),
    ),
    (
        FinancialType::LoanTerm,
        r"\b\d+\s*(?:months?|years?|days?|EMI|installments?|месяц(?:ев|а)?|лет|год(?:а|ов)?|дней|дня)\b",
    ),
];
