use crate::engine::CharOffsets;
use crate::models::ProfanityFinding;
use crate::patterns::PatternLibrary;

/// Scan for prohibited phrases and profane words.
///
/// Phrases report their first occurrence only; words report every occurrence.
/// Phrase findings come first, in phrase-table order, then words in text order.
/// Both scans ignore case and are not deduplicated against each other.
/// Offsets are in characters.
pub fn detect_profanity(text: &str, library: &PatternLibrary) -> Vec<ProfanityFinding> {
    let offsets = CharOffsets::new(text);
    let mut findings = Vec::new();

    for (phrase, matcher) in &library.prohibited_phrases {
        if let Some(m) = matcher.find(text) {
            let (start, end) = offsets.to_chars(m.start(), m.end());
            findings.push(ProfanityFinding::prohibited_phrase(phrase, start, end));
        }
    }

    for m in library.word.find_iter(text) {
        let word = m.as_str().to_lowercase();
        if library.profanity_words.contains(word.as_str()) {
            let (start, end) = offsets.to_chars(m.start(), m.end());
            findings.push(ProfanityFinding::profanity(&word, start, end));
        }
    }

    findings
}
