use crate::engine::CharOffsets;
use crate::models::FinancialEntity;
use crate::patterns::PatternLibrary;

/// Extract amounts, percentages, dates and loan terms.
///
/// Patterns run independently; overlapping matches from different patterns
/// are all returned, grouped by pattern in table order. Offsets are in characters.
pub fn extract_financial_entities(text: &str, library: &PatternLibrary) -> Vec<FinancialEntity> {
    let offsets = CharOffsets::new(text);
    let mut entities = Vec::new();

    for (entity_type, regex) in &library.financial {
        for m in regex.find_iter(text) {
            let (start, end) = offsets.to_chars(m.start(), m.end());
            entities.push(FinancialEntity {
                entity_type: *entity_type,
                value: m.as_str().to_string(),
                start,
                end,
            });
        }
    }

    entities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FinancialType;

    fn values(entities: &[FinancialEntity], entity_type: FinancialType) -> Vec<&str> {
        entities
            .iter()
            .filter(|e| e.entity_type == entity_type)
            .map(|e| e.value.as_str())
            .collect()
    }

    #[test]
    fn test_english_and_indian_amounts() {
        let library = PatternLibrary::new().unwrap();
        let text = "The loan is Rs. 5,00,000 or about $6,000.50, repaid as 2 lakhs a year";
        let entities = extract_financial_entities(text, &library);

        let amounts = values(&entities, FinancialType::CurrencyAmount);
        assert!(amounts.contains(&"Rs. 5,00,000"));
        assert!(amounts.contains(&"$6,000.50"));
        assert!(amounts.contains(&"2 lakhs"));
    }

    #[test]
    fn test_percentages_and_terms() {
        let library = PatternLibrary::new().unwrap();
        let text = "Interest is 12.5 percent for 24 months, ставка 15 процентов на 3 года";
        let entities = extract_financial_entities(text, &library);

        let percentages = values(&entities, FinancialType::Percentage);
        assert!(percentages.contains(&"12.5 percent"));
        assert!(percentages.contains(&"15 процентов"));

        let terms = values(&entities, FinancialType::LoanTerm);
        assert!(terms.contains(&"24 months"));
        assert!(terms.contains(&"3 года"));
    }

    #[test]
    fn test_rouble_amounts() {
        let library = PatternLibrary::new().unwrap();
        let text = "Сумма 50000 рублей";
        let entities = extract_financial_entities(text, &library);

        let roubles = values(&entities, FinancialType::CurrencyRub);
        assert_eq!(roubles, vec!["50000 рублей"]);

        let rouble = entities
            .iter()
            .find(|e| e.entity_type == FinancialType::CurrencyRub)
            .unwrap();
        assert_eq!((rouble.start, rouble.end), (6, 18));
    }

    #[test]
    fn test_dates_in_several_formats() {
        let library = PatternLibrary::new().unwrap();
        let text = "Due 12/05/2024, or Jan 15, 2025, or 3 March 2025, или 5 марта 2025";
        let entities = extract_financial_entities(text, &library);

        let dates = values(&entities, FinancialType::DateReference);
        assert!(dates.contains(&"12/05/2024"));
        assert!(dates.contains(&"Jan 15, 2025"));
        assert!(dates.contains(&"3 March 2025"));
        assert!(dates.iter().any(|d| d.starts_with("5 марта")));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let library = PatternLibrary::new().unwrap();
        let text = "Pay $100 within 30 days at 5% or 2000 рублей";
        let first = extract_financial_entities(text, &library);
        for _ in 0..3 {
            assert_eq!(extract_financial_entities(text, &library), first);
        }
        for e in &first {
            assert_eq!(&text[e.start..e.end], e.value);
        }
    }
}
