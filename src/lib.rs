pub mod config;
pub mod detectors;
pub mod engine;
pub mod error;
pub mod extractors;
pub mod heuristics;
pub mod io;
pub mod models;
pub mod patterns;
pub mod recognizers;
pub mod risk;
pub mod screener;

pub use config::ScreenConfig;
pub use detectors::{detect_pii, detect_pii_regex, try_detect_pii};
pub use engine::{EntityEngine, OfflineEngine, PresidioConfig, PresidioEngine};
pub use error::{EngineError, PatternError};
pub use extractors::{
    detect_profanity, extract_financial_entities, extract_named_entities, extract_obligations,
};
pub use io::{ReportSummary, ScreeningOutput, load_policy_documents, read_transcript};
pub use models::{
    FinancialEntity, NamedEntity, ObligationSentence, PiiType, ProfanityFinding, Report,
    RiskLevel, Span,
};
pub use patterns::PatternLibrary;
pub use risk::aggregate_risk;
pub use screener::{PiiComparison, Screener};
