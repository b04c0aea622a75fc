//! Tag document normalization.
//!
//! Canonicalizes a tag-regulator output document into a deduplicated,
//! deterministically ordered form. Each field is handled by its own step;
//! a field with an unexpected shape is left exactly as it was, and the
//! other fields are still normalized.
//!
//! # Rules
//!
//! - `remove_tags`: kept only where present in `input_tags`, in
//!   `input_tags` order, duplicates collapsed.
//! - `add_tags`: deduplicated, sorted ascending.
//! - `suggest_tags`: `{tag, note}` objects deduplicated by `tag` (first
//!   wins) and sorted by `tag`; plain strings treated like `add_tags`.

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::debug;

use crate::document::{as_string_list, fields, SuggestTags, SuggestionEntry};

/// What a normalization step did to its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
    /// Field rewritten into canonical form
    Normalized,
    /// Field present but not in a recognized shape; left as is
    Untouched,
    /// Field not present
    Absent,
}

/// Per-field outcomes of one normalization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeReport {
    pub remove_tags: FieldOutcome,
    pub add_tags: FieldOutcome,
    pub suggest_tags: FieldOutcome,
}

impl NormalizeReport {
    fn passthrough() -> Self {
        Self {
            remove_tags: FieldOutcome::Absent,
            add_tags: FieldOutcome::Absent,
            suggest_tags: FieldOutcome::Absent,
        }
    }

    /// Number of fields rewritten.
    pub fn normalized_count(&self) -> usize {
        [self.remove_tags, self.add_tags, self.suggest_tags]
            .iter()
            .filter(|o| **o == FieldOutcome::Normalized)
            .count()
    }
}

/// Normalize a tag document. Never fails; non-object documents are returned
/// unchanged.
pub fn normalize_document(doc: Value) -> Value {
    normalize_document_with_report(doc).0
}

/// Normalize a tag document and report what happened to each field.
pub fn normalize_document_with_report(doc: Value) -> (Value, NormalizeReport) {
    let mut obj = match doc {
        Value::Object(obj) => obj,
        other => {
            debug!("document is not an object, passing through");
            return (other, NormalizeReport::passthrough());
        }
    };

    let report = NormalizeReport {
        remove_tags: normalize_remove_tags(&mut obj),
        add_tags: normalize_add_tags(&mut obj),
        suggest_tags: normalize_suggest_tags(&mut obj),
    };
    debug!(?report, "normalized tag document");

    (Value::Object(obj), report)
}

fn normalize_remove_tags(obj: &mut Map<String, Value>) -> FieldOutcome {
    let Some(remove_value) = obj.get(fields::REMOVE_TAGS) else {
        return FieldOutcome::Absent;
    };

    // Both lists must be string lists; otherwise remove_tags stays as is.
    let input = obj.get(fields::INPUT_TAGS).and_then(as_string_list);
    let (Some(input), Some(remove)) = (input, as_string_list(remove_value)) else {
        return FieldOutcome::Untouched;
    };

    let remove_set: HashSet<&str> = remove.iter().map(String::as_str).collect();
    let kept: Vec<String> = input
        .into_iter()
        .filter(|t| remove_set.contains(t.as_str()))
        .collect();

    obj.insert(
        fields::REMOVE_TAGS.to_string(),
        string_array(dedup_preserve_order(&kept)),
    );
    FieldOutcome::Normalized
}

fn normalize_add_tags(obj: &mut Map<String, Value>) -> FieldOutcome {
    let Some(value) = obj.get(fields::ADD_TAGS) else {
        return FieldOutcome::Absent;
    };
    let Some(tags) = as_string_list(value) else {
        return FieldOutcome::Untouched;
    };

    obj.insert(fields::ADD_TAGS.to_string(), string_array(dedup_sorted(&tags)));
    FieldOutcome::Normalized
}

fn normalize_suggest_tags(obj: &mut Map<String, Value>) -> FieldOutcome {
    let Some(value) = obj.get(fields::SUGGEST_TAGS) else {
        return FieldOutcome::Absent;
    };
    let Some(items) = value.as_array() else {
        return FieldOutcome::Untouched;
    };

    let normalized = match SuggestTags::probe(items) {
        SuggestTags::Structured(entries) => {
            match serde_json::to_value(dedup_suggestions(entries)) {
                Ok(rendered) => rendered,
                Err(e) => {
                    debug!("failed to render suggestions, leaving field as is: {}", e);
                    return FieldOutcome::Untouched;
                }
            }
        }
        SuggestTags::Plain(tags) => string_array(dedup_sorted(&tags)),
        SuggestTags::Unrecognized => return FieldOutcome::Untouched,
    };

    obj.insert(fields::SUGGEST_TAGS.to_string(), normalized);
    FieldOutcome::Normalized
}

/// Drop repeated values, keeping the first occurrence of each.
pub fn dedup_preserve_order(values: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    values
        .iter()
        .filter(|v| seen.insert(v.as_str()))
        .cloned()
        .collect()
}

/// Drop repeated values and sort ascending by code point.
pub fn dedup_sorted(values: &[String]) -> Vec<String> {
    let mut out = dedup_preserve_order(values);
    out.sort();
    out
}

/// Keep the first entry for each tag, then order by tag.
fn dedup_suggestions(entries: Vec<SuggestionEntry>) -> Vec<SuggestionEntry> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<SuggestionEntry> = entries
        .into_iter()
        .filter(|e| seen.insert(e.tag.clone()))
        .collect();
    out.sort_by(|a, b| a.tag.cmp(&b.tag));
    out
}

fn string_array(values: Vec<String>) -> Value {
    Value::Array(values.into_iter().map(Value::String).collect())
}
