//! Capability interface to the external entity-recognition engine

pub mod offline;
pub mod presidio;
pub mod segment;

pub use offline::*;
pub use presidio::*;
pub use segment::*;

use async_trait::async_trait;

use crate::error::EngineError;
use crate::models::{NamedEntity, PiiType, RecognizerResult};

/// A statistical entity recognizer.
///
/// Offsets in everything an engine returns are byte offsets into `text`.
#[async_trait]
pub trait EntityEngine: Send + Sync {
    /// Typed PII spans for the requested categories scoring at least `threshold`
    async fn analyze(
        &self,
        text: &str,
        entities: &[PiiType],
        language: &str,
        threshold: f64,
    ) -> Result<Vec<RecognizerResult>, EngineError>;

    /// General named entities (persons, organizations, places, amounts ...)
    async fn named_entities(&self, text: &str) -> Result<Vec<NamedEntity>, EngineError>;

    /// Sentence boundaries. Engines without a parser use the rule-based splitter.
    fn segment_sentences(&self, text: &str) -> Vec<SentenceSpan> {
        split_sentences(text)
    }
}

/// Maps between character (Unicode scalar) offsets and byte offsets for one text.
///
/// Engines and regexes work in bytes; everything a screening report exposes is
/// in characters.
pub struct CharOffsets {
    boundaries: Vec<usize>,
}

impl CharOffsets {
    pub fn new(text: &str) -> Self {
        let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        boundaries.push(text.len());
        Self { boundaries }
    }

    /// Number of characters in the text
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Convert a half-open character range into a byte range
    pub fn to_bytes(&self, start: usize, end: usize) -> Result<(usize, usize), EngineError> {
        match (self.boundaries.get(start), self.boundaries.get(end)) {
            (Some(&s), Some(&e)) if start < end => Ok((s, e)),
            _ => Err(EngineError::SpanOutOfBounds {
                start,
                end,
                len: self.char_len(),
            }),
        }
    }

    /// Character index of a byte offset; an offset inside a character maps to that character
    pub fn to_char(&self, byte: usize) -> usize {
        match self.boundaries.binary_search(&byte) {
            Ok(index) => index,
            Err(index) => index.saturating_sub(1),
        }
    }

    /// Convert a half-open byte range into a character range
    pub fn to_chars(&self, start: usize, end: usize) -> (usize, usize) {
        (self.to_char(start), self.to_char(end))
    }

    /// The text covered by a half-open character range
    pub fn slice<'a>(&self, text: &'a str, start: usize, end: usize) -> Option<&'a str> {
        let (start, end) = self.to_bytes(start, end).ok()?;
        text.get(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_offsets_ascii() {
        let offsets = CharOffsets::new("hello");
        assert_eq!(offsets.char_len(), 5);
        assert_eq!(offsets.to_bytes(1, 3).unwrap(), (1, 3));
        assert_eq!(offsets.to_bytes(0, 5).unwrap(), (0, 5));
    }

    #[test]
    fn test_char_offsets_cyrillic() {
        let text = "штраф 500";
        let offsets = CharOffsets::new(text);
        let (start, end) = offsets.to_bytes(0, 5).unwrap();
        assert_eq!(&text[start..end], "штраф");
        let (start, end) = offsets.to_bytes(6, 9).unwrap();
        assert_eq!(&text[start..end], "500");
    }

    #[test]
    fn test_byte_to_char_cyrillic() {
        let text = "Мой номер +7";
        let offsets = CharOffsets::new(text);
        let plus = text.find('+').unwrap();
        assert_eq!(plus, 18);
        assert_eq!(offsets.to_chars(plus, text.len()), (10, 12));
        assert_eq!(offsets.to_char(1), 0);
        assert_eq!(offsets.slice(text, 4, 9), Some("номер"));
        assert_eq!(offsets.slice(text, 4, 40), None);
    }

    #[test]
    fn test_char_offsets_rejects_bad_ranges() {
        let offsets = CharOffsets::new("abc");
        assert!(offsets.to_bytes(2, 4).is_err());
        assert!(offsets.to_bytes(2, 2).is_err());
        assert!(offsets.to_bytes(3, 1).is_err());
    }
}
