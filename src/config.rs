/// Per-screener settings
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    /// Minimum calibrated confidence for a statistical PII span
    pub score_threshold: f64,
    /// How many characters before a span are searched for context triggers
    pub context_window_chars: usize,
    /// Language the statistical engine and general NER support
    pub supported_language: String,
    /// Tag stamped on every report
    pub layer: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            score_threshold: 0.5,
            context_window_chars: 50,
            supported_language: "en".to_string(),
            layer: "text_processing".to_string(),
        }
    }
}

impl ScreenConfig {
    /// Whether `language` (e.g. "en", "EN-us") is served by the engine's model
    pub fn supports_language(&self, language: &str) -> bool {
        language
            .to_lowercase()
            .starts_with(&self.supported_language.to_lowercase())
    }
}
