use thiserror::Error;

/// Failures of the external entity-recognition engine.
///
/// These never escape the screener: the statistical detector falls back to
/// the regex detector and the named-entity extractor returns nothing.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("engine returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("engine response could not be decoded: {0}")]
    Decode(String),

    #[error("engine span {start}..{end} does not fit a text of length {len}")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },

    #[error("engine unavailable: {0}")]
    Unavailable(String),
}

/// A pattern in the library failed to compile. Fatal at startup.
#[derive(Debug, Error)]
#[error("pattern {name} failed to compile: {source}")]
pub struct PatternError {
    pub name: String,
    #[source]
    pub source: regex::Error,
}

impl PatternError {
    pub fn new(name: impl Into<String>, source: regex::Error) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }
}
