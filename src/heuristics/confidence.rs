use crate::models::PiiType;
use crate::patterns::PatternLibrary;

/// Everything the calibration rules look at for one span
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringContext {
    /// Type as reported by the recognizer (before type correction)
    pub entity_type: PiiType,
    pub raw_score: f64,
    /// Length of the value in characters
    pub value_chars: usize,
    pub is_stop_word: bool,
}

impl ScoringContext {
    pub fn new(entity_type: PiiType, value: &str, raw_score: f64, library: &PatternLibrary) -> Self {
        let value_lower = value.to_lowercase();
        Self {
            entity_type,
            raw_score,
            value_chars: value_lower.chars().count(),
            is_stop_word: library.stop_words.contains(value_lower.as_str()),
        }
    }
}

/// Clamped additive change to a score
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    Raise { by: f64, cap: f64 },
    Lower { by: f64, floor: f64 },
}

impl Adjustment {
    pub fn apply(&self, score: f64) -> f64 {
        match *self {
            Adjustment::Raise { by, cap } => (score + by).min(cap),
            Adjustment::Lower { by, floor } => (score - by).max(floor),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConfidenceRule {
    pub name: &'static str,
    pub applies: fn(&ScoringContext) -> bool,
    pub adjustment: Adjustment,
    /// Stop evaluating later rules once this one fires
    pub terminal: bool,
}

pub const CONFIDENCE_RULES: [ConfidenceRule; 4] = [
    ConfidenceRule {
        name: "exact_pattern_type",
        applies: |ctx| ctx.entity_type.is_exact_pattern(),
        adjustment: Adjustment::Raise { by: 0.10, cap: 0.95 },
        terminal: true,
    },
    ConfidenceRule {
        name: "long_value",
        applies: |ctx| ctx.value_chars > 10,
        adjustment: Adjustment::Raise { by: 0.05, cap: 0.95 },
        terminal: false,
    },
    ConfidenceRule {
        name: "short_value",
        applies: |ctx| ctx.value_chars < 4,
        adjustment: Adjustment::Lower { by: 0.15, floor: 0.40 },
        terminal: false,
    },
    ConfidenceRule {
        name: "stop_word",
        applies: |ctx| ctx.is_stop_word,
        adjustment: Adjustment::Lower { by: 0.30, floor: 0.30 },
        terminal: false,
    },
];

/// Recalibrate a raw engine score, rounded to three decimals
pub fn calibrate(ctx: &ScoringContext) -> f64 {
    let mut score = ctx.raw_score;

    for rule in &CONFIDENCE_RULES {
        if (rule.applies)(ctx) {
            score = rule.adjustment.apply(score);
            if rule.terminal {
                break;
            }
        }
    }

    (score * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(entity_type: PiiType, value: &str, raw_score: f64) -> ScoringContext {
        ScoringContext::new(entity_type, value, raw_score, &PatternLibrary::new().unwrap())
    }

    #[test]
    fn test_exact_pattern_boost_is_capped_and_terminal() {
        assert_eq!(calibrate(&ctx(PiiType::UsSsn, "123-45-6789", 0.85)), 0.95);
        assert_eq!(calibrate(&ctx(PiiType::IndiaId, "ABCDE1234F", 0.5)), 0.6);
        // Short exact values skip the short-value penalty
        assert_eq!(calibrate(&ctx(PiiType::CreditCard, "123", 0.7)), 0.8);
        // Caps also pull down scores already above the cap
        assert_eq!(calibrate(&ctx(PiiType::RemoteAccessCode, "1037498400", 1.0)), 0.95);
    }

    #[test]
    fn test_long_value_boost() {
        assert_eq!(calibrate(&ctx(PiiType::Person, "Jonathan Smith", 0.85)), 0.9);
        assert_eq!(calibrate(&ctx(PiiType::Person, "Jonathan Smith", 0.93)), 0.95);
    }

    #[test]
    fn test_mid_length_value_unchanged() {
        assert_eq!(calibrate(&ctx(PiiType::Person, "John Smith", 0.85)), 0.85);
    }

    #[test]
    fn test_short_value_penalty_and_floor() {
        assert_eq!(calibrate(&ctx(PiiType::Person, "Raj", 0.85)), 0.7);
        assert_eq!(calibrate(&ctx(PiiType::Person, "Raj", 0.5)), 0.4);
    }

    #[test]
    fn test_stop_word_penalty_follows_short_penalty() {
        // 0.85 -> 0.70 (short) -> 0.40 (stop word)
        assert_eq!(calibrate(&ctx(PiiType::Person, "One", 0.85)), 0.4);
        // 0.6 -> 0.45 (short) -> 0.30 (floor)
        assert_eq!(calibrate(&ctx(PiiType::Location, "the", 0.6)), 0.3);
        // "three" is not short, only the stop-word rule applies
        assert_eq!(calibrate(&ctx(PiiType::Person, "three", 0.85)), 0.55);
    }

    #[test]
    fn test_calibration_is_repeatable() {
        let c = ctx(PiiType::Location, "Springfield Gardens", 0.77);
        let first = calibrate(&c);
        for _ in 0..5 {
            assert_eq!(calibrate(&c), first);
        }
    }

    #[test]
    fn test_adjustment_clamps() {
        assert_eq!(Adjustment::Raise { by: 0.1, cap: 0.95 }.apply(0.9), 0.95);
        assert_eq!(Adjustment::Lower { by: 0.15, floor: 0.4 }.apply(0.3), 0.4);
    }
}
