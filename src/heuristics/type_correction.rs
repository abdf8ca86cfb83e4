use crate::models::PiiType;
use crate::patterns::PatternLibrary;

/// Reclassify a span from its value and the text just before it.
///
/// 1. A LOCATION whose value is a known first name becomes PERSON.
/// 2. Otherwise the first context trigger found in the `window_chars`
///    characters before `start` forces its mapped type.
pub fn correct_entity_type(
    value: &str,
    entity_type: PiiType,
    text: &str,
    start: usize,
    library: &PatternLibrary,
    window_chars: usize,
) -> PiiType {
    let value_lower = value.trim().to_lowercase();

    if entity_type == PiiType::Location && library.person_names.contains(value_lower.as_str()) {
        return PiiType::Person;
    }

    let context = preceding_window(text, start, window_chars).to_lowercase();

    library
        .context_corrections
        .iter()
        .find(|(trigger, _)| context.contains(trigger))
        .map(|(_, corrected)| *corrected)
        .unwrap_or(entity_type)
}

/// The last `window_chars` characters of `text[..start]`
fn preceding_window(text: &str, start: usize, window_chars: usize) -> &str {
    let prefix = &text[..start];
    if window_chars == 0 {
        return "";
    }
    let window_start = prefix
        .char_indices()
        .rev()
        .nth(window_chars - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &prefix[window_start..]
}
