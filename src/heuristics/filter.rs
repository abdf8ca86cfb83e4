use crate::models::PiiType;
use crate::patterns::PatternLibrary;

/// Whether a span is a known false positive and should be dropped
///
/// Drops deny-listed values, values shorter than two characters, and purely
/// numeric values tagged as a person or location.
pub fn should_filter(value: &str, entity_type: PiiType, library: &PatternLibrary) -> bool {
    let value_lower = value.trim().to_lowercase();

    if library.deny_list.contains(value_lower.as_str()) {
        return true;
    }

    if value_lower.chars().count() < 2 {
        return true;
    }

    matches!(entity_type, PiiType::Person | PiiType::Location)
        && value_lower.chars().all(|c| c.is_numeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> PatternLibrary {
        PatternLibrary::new().unwrap()
    }

    #[test]
    fn test_deny_listed_values_are_filtered() {
        let library = library();
        assert!(should_filter("Zoom", PiiType::Person, &library));
        assert!(should_filter(" WhatsApp ", PiiType::Location, &library));
        assert!(should_filter("cash app", PiiType::Person, &library));
    }

    #[test]
    fn test_short_values_are_filtered() {
        let library = library();
        assert!(should_filter("J", PiiType::Person, &library));
        assert!(should_filter(" x ", PiiType::EmailAddress, &library));
    }

    #[test]
    fn test_numeric_names_and_places_are_filtered() {
        let library = library();
        assert!(should_filter("42", PiiType::Person, &library));
        assert!(should_filter("1990", PiiType::Location, &library));
        assert!(!should_filter("123456789", PiiType::SensitiveNumber, &library));
    }

    #[test]
    fn test_real_names_pass() {
        let library = library();
        assert!(!should_filter("John Smith", PiiType::Person, &library));
        assert!(!should_filter("Mumbai", PiiType::Location, &library));
    }
}
