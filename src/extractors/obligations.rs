use crate::engine::{CharOffsets, EntityEngine};
use crate::models::ObligationSentence;
use crate::patterns::PatternLibrary;

/// Sentences containing at least one obligation keyword.
///
/// Sentence boundaries come from the engine. A keyword only matches when it is
/// not glued to a word character on either side, so "должен" never fires
/// inside "продолжение". Sentence offsets are in characters.
pub fn extract_obligations(
    engine: &dyn EntityEngine,
    text: &str,
    library: &PatternLibrary,
) -> Vec<ObligationSentence> {
    let offsets = CharOffsets::new(text);

    engine
        .segment_sentences(text)
        .into_iter()
        .filter_map(|sentence| {
            let lower = sentence.text.to_lowercase();
            let keywords: Vec<String> = library
                .obligation_keywords
                .iter()
                .filter(|keyword| contains_bounded(&lower, keyword))
                .map(|keyword| keyword.to_string())
                .collect();

            if keywords.is_empty() {
                return None;
            }

            let (start, end) = offsets.to_chars(sentence.start, sentence.end);
            Some(ObligationSentence {
                sentence: sentence.text.trim().to_string(),
                keywords,
                start,
                end,
            })
        })
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// `needle` occurs in `haystack` with no word character directly before or after
fn contains_bounded(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(pos, matched)| {
        let before = haystack[..pos].chars().next_back();
        let after = haystack[pos + matched.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}
