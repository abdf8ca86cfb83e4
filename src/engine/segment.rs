use serde::{Deserialize, Serialize};

/// A sentence with its byte range in the source text (trailing whitespace excluded)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

const TERMINATORS: &[char] = &['.', '!', '?', '…', '।'];
const CLOSERS: &[char] = &['"', '\'', ')', ']', '»', '”', '’'];

/// Words whose trailing period does not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "e.g", "i.e", "rs",
];

/// Split text into sentences on terminal punctuation followed by whitespace,
/// and on line breaks.
pub fn split_sentences(text: &str) -> Vec<SentenceSpan> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut sentence_start: Option<usize> = None;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];

        let start = match sentence_start {
            Some(start) => start,
            None if c.is_whitespace() => {
                i += 1;
                continue;
            }
            None => {
                sentence_start = Some(pos);
                pos
            }
        };

        if c == '\n' {
            push_sentence(text, start, pos, &mut sentences);
            sentence_start = None;
            i += 1;
            continue;
        }

        if TERMINATORS.contains(&c) {
            let mut j = i + 1;
            while j < chars.len() && (TERMINATORS.contains(&chars[j].1) || CLOSERS.contains(&chars[j].1)) {
                j += 1;
            }
            let at_break = j == chars.len() || chars[j].1.is_whitespace();
            let abbreviated = c == '.' && j == i + 1 && ends_with_abbreviation(&text[start..pos]);

            if at_break && !abbreviated {
                let end = chars.get(j).map(|(p, _)| *p).unwrap_or(text.len());
                push_sentence(text, start, end, &mut sentences);
                sentence_start = None;
            }
            i = j;
            continue;
        }

        i += 1;
    }

    if let Some(start) = sentence_start {
        push_sentence(text, start, text.len(), &mut sentences);
    }

    sentences
}

fn push_sentence(text: &str, start: usize, end: usize, sentences: &mut Vec<SentenceSpan>) {
    let trimmed = text[start..end].trim_end();
    if !trimmed.is_empty() {
        sentences.push(SentenceSpan {
            text: trimmed.to_string(),
            start,
            end: start + trimmed.len(),
        });
    }
}

fn ends_with_abbreviation(fragment: &str) -> bool {
    fragment
        .split_whitespace()
        .last()
        .map(|word| {
            let word = word.trim_start_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
            ABBREVIATIONS.contains(&word.as_str())
        })
        .unwrap_or(false)
}
