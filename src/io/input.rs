use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Extensions recognised as policy documents
const POLICY_EXTENSIONS: &[&str] = &["txt", "ttx"];

/// A transcript exported as JSON by the speech-to-text step
#[derive(Debug, Deserialize)]
struct TranscriptFile {
    transcript: String,
}

/// Read a transcript file: `.json` files must hold a `transcript` field,
/// anything else is read as plain text
pub fn read_transcript(path: &Path) -> Result<String> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;

    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        return parse_transcript_json(&content);
    }

    Ok(content)
}

/// Extract the transcript text from a JSON export
pub fn parse_transcript_json(json: &str) -> Result<String> {
    let file: TranscriptFile =
        serde_json::from_str(json).context("Failed to parse transcript JSON")?;
    if file.transcript.trim().is_empty() {
        bail!("Transcript JSON has an empty `transcript` field");
    }
    Ok(file.transcript)
}

/// Load policy documents from a directory, keyed by file stem.
///
/// A missing directory yields an empty map. Files that are not valid UTF-8 are
/// read lossily.
pub fn load_policy_documents(dir: &Path) -> Result<BTreeMap<String, String>> {
    let mut documents = BTreeMap::new();

    if !dir.is_dir() {
        return Ok(documents);
    }

    let entries =
        std::fs::read_dir(dir).with_context(|| format!("Failed to read directory: {:?}", dir))?;

    for entry in entries {
        let path = entry?.path();
        let is_policy = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| POLICY_EXTENSIONS.contains(&ext));
        if !path.is_file() || !is_policy {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        let bytes = std::fs::read(&path).with_context(|| format!("Failed to read file: {:?}", path))?;
        documents.insert(stem.to_string(), String::from_utf8_lossy(&bytes).into_owned());
    }

    Ok(documents)
}
