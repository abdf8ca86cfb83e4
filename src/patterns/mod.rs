pub mod financial;
pub mod lexicon;
pub mod pii;

pub use financial::*;
pub use lexicon::*;
pub use pii::*;

use std::collections::HashSet;

use regex::{Regex, RegexBuilder};

use crate::error::PatternError;
use crate::models::{FinancialType, PiiType};
use crate::recognizers::{PatternRecognizer, custom_recognizers};

/// Compiled, read-only screening configuration.
///
/// Built once at startup and shared by reference with every detector and
/// extractor. Nothing in here changes after construction.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    /// Legacy PII patterns, in table order
    pub pii: Vec<(PiiType, Regex)>,
    /// Financial patterns, in table order
    pub financial: Vec<(FinancialType, Regex)>,
    /// Custom recognizers merged with the statistical engine's output
    pub recognizers: Vec<PatternRecognizer>,
    /// Prohibited phrases with a case-insensitive literal matcher each
    pub prohibited_phrases: Vec<(&'static str, Regex)>,
    pub profanity_words: HashSet<&'static str>,
    pub obligation_keywords: Vec<&'static str>,
    pub deny_list: HashSet<&'static str>,
    pub person_names: HashSet<&'static str>,
    pub context_corrections: Vec<(&'static str, PiiType)>,
    pub stop_words: HashSet<&'static str>,
    /// Word tokenizer used by the profanity scan
    pub word: Regex,
}

impl PatternLibrary {
    /// Compile every table
    pub fn new() -> Result<Self, PatternError> {
        let pii = PII_PATTERNS
            .iter()
            .map(|(kind, pattern)| Ok((*kind, compile(kind.as_str(), pattern, false)?)))
            .collect::<Result<Vec<_>, PatternError>>()?;

        let financial = FINANCIAL_PATTERNS
            .iter()
            .map(|(kind, pattern)| Ok((*kind, compile(&format!("{:?}", kind), pattern, true)?)))
            .collect::<Result<Vec<_>, PatternError>>()?;

        let prohibited_phrases = PROHIBITED_PHRASES
            .iter()
            .map(|phrase| Ok((*phrase, compile(phrase, &regex::escape(phrase), true)?)))
            .collect::<Result<Vec<_>, PatternError>>()?;

        Ok(Self {
            pii,
            financial,
            recognizers: custom_recognizers()?,
            prohibited_phrases,
            profanity_words: PROFANITY_WORDS.iter().copied().collect(),
            obligation_keywords: OBLIGATION_KEYWORDS.to_vec(),
            deny_list: DENY_LIST.iter().copied().collect(),
            person_names: PERSON_NOT_LOCATION.iter().copied().collect(),
            context_corrections: CONTEXT_CORRECTIONS.to_vec(),
            stop_words: STOP_WORDS.iter().copied().collect(),
            word: compile("word", r"\w+", false)?,
        })
    }
}

fn compile(name: &str, pattern: &str, case_insensitive: bool) -> Result<Regex, PatternError> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|e| PatternError::new(name, e))
}
