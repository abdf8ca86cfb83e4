use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::models::{Report, Span};

/// Machine-readable screening result, one per transcript
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningOutput {
    pub report_id: String,
    /// RFC 3339 timestamp
    pub generated_at: String,
    /// Transcript file the report was produced from
    pub source: String,
    pub language: String,
    pub report: Report,
}

impl ScreeningOutput {
    pub fn new(report: Report, source: &Path, language: &str) -> Self {
        Self {
            report_id: uuid::Uuid::new_v4().to_string(),
            generated_at: Utc::now().to_rfc3339(),
            source: source.display().to_string(),
            language: language.to_string(),
            report,
        }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Human-readable report summary
pub struct ReportSummary<'a> {
    report: &'a Report,
}

impl<'a> ReportSummary<'a> {
    pub fn new(report: &'a Report) -> Self {
        Self { report }
    }

    /// Format the report as plain text
    pub fn format(&self) -> String {
        let report = self.report;
        let mut output = String::new();

        output.push_str(&format!("Risk level: {}\n\n", report.risk_level));

        output.push_str(&format!("PII ({})\n", report.pii_count));
        for span in &report.pii_detected {
            output.push_str(&format_span(span));
        }

        output.push_str(&format!("\nFinancial ({})\n", report.financial_entities.len()));
        for entity in &report.financial_entities {
            output.push_str(&format!(
                "  [{}..{}] {:?}: {}\n",
                entity.start, entity.end, entity.entity_type, entity.value
            ));
        }

        output.push_str(&format!("\nNamed entities ({})\n", report.named_entities.len()));
        for entity in &report.named_entities {
            output.push_str(&format!(
                "  [{}..{}] {:?}: {}\n",
                entity.start, entity.end, entity.label, entity.text
            ));
        }

        output.push_str(&format!(
            "\nProhibited language ({})\n",
            report.profanity_findings.len()
        ));
        for finding in &report.profanity_findings {
            output.push_str(&format!(
                "  [{}..{}] {:?} ({}): {}\n",
                finding.start, finding.end, finding.kind, finding.severity, finding.value
            ));
        }

        output.push_str(&format!(
            "\nObligations ({})\n",
            report.obligation_sentences.len()
        ));
        for sentence in &report.obligation_sentences {
            output.push_str(&format!(
                "  \"{}\" [{}]\n",
                sentence.sentence,
                sentence.keywords.join(", ")
            ));
        }

        output
    }

    /// Write to a text file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

fn format_span(span: &Span) -> String {
    let confidence = span
        .confidence
        .map(|c| format!("{:.3}", c))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "  [{}..{}] {} {} (confidence {}, risk {}, {:?})\n",
        span.start, span.end, span.entity_type, span.value, confidence, span.risk, span.method
    )
}
