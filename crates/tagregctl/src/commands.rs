//! Command implementations for tagregctl
//!
//! Each command does one read, one component call and at most one write.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tagreg_common::normalize::{normalize_document_with_report, NormalizeReport};
use tagreg_common::vocabulary::{self, LoadedVocabulary, VocabularyFormat};
use tagreg_common::VocabularyError;
use tracing::info;

/// Normalize a tag-regulator output file in place.
pub fn normalize_output(path: &Path) -> Result<NormalizeReport> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let doc: Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let (doc, report) = normalize_document_with_report(doc);

    std::fs::write(path, render_document(&doc)?)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(
        path = %path.display(),
        normalized = report.normalized_count(),
        "normalized output document"
    );
    Ok(report)
}

/// Pretty JSON with 2-space indent, raw UTF-8 and a trailing newline.
pub fn render_document(doc: &Value) -> Result<String> {
    let mut out = serde_json::to_string_pretty(doc).context("failed to serialize document")?;
    out.push('\n');
    Ok(out)
}

/// Check that a vocabulary file is a top-level list of strings.
pub fn validate_tags(
    path: &Path,
    format: VocabularyFormat,
) -> Result<LoadedVocabulary, VocabularyError> {
    let loaded = vocabulary::load(path, format)?;
    info!(
        path = %path.display(),
        requested = %format,
        detected = %loaded.format,
        tags = loaded.tags.len(),
        "vocabulary is valid"
    );
    Ok(loaded)
}
