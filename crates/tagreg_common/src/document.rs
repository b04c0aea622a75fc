//! Tag document shapes.
//!
//! A tag document is kept as a `serde_json::Value` so that malformed fields
//! survive untouched. The types here are the shapes the normalizer recognizes
//! inside that value.

use serde::Serialize;
use serde_json::Value;

/// Document keys the normalizer knows about.
pub mod fields {
    pub const INPUT_TAGS: &str = "input_tags";
    pub const REMOVE_TAGS: &str = "remove_tags";
    pub const ADD_TAGS: &str = "add_tags";
    pub const SUGGEST_TAGS: &str = "suggest_tags";
}

/// A structured tag recommendation.
/// Serializes as `{"tag": .., "note": ..}`, keys in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionEntry {
    /// Suggested tag name
    pub tag: String,
    /// Why the tag is suggested
    pub note: String,
}

impl SuggestionEntry {
    /// Read an entry from a JSON object with string `tag` and `note`.
    /// Any other key on the object is ignored.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let tag = obj.get("tag")?.as_str()?;
        let note = obj.get("note")?.as_str()?;
        Some(Self {
            tag: tag.to_string(),
            note: note.to_string(),
        })
    }
}

/// Resolved shape of a `suggest_tags` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestTags {
    /// Every element is a `{tag, note}` object
    Structured(Vec<SuggestionEntry>),
    /// Every element is a plain string
    Plain(Vec<String>),
    /// Anything else (mixed, numbers, incomplete objects)
    Unrecognized,
}

impl SuggestTags {
    /// Two-stage shape probe: structured objects first, plain strings second.
    ///
    /// An empty array resolves to `Structured(vec![])`, which normalizes to
    /// an empty array either way.
    pub fn probe(items: &[Value]) -> Self {
        let structured: Option<Vec<SuggestionEntry>> =
            items.iter().map(SuggestionEntry::from_value).collect();
        if let Some(entries) = structured {
            return Self::Structured(entries);
        }

        match string_items(items) {
            Some(tags) => Self::Plain(tags),
            None => Self::Unrecognized,
        }
    }
}

/// Return the strings of `value` if it is an array made only of strings.
pub fn as_string_list(value: &Value) -> Option<Vec<String>> {
    string_items(value.as_array()?)
}

fn string_items(items: &[Value]) -> Option<Vec<String>> {
    items
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_list_accepts_empty_and_strings() {
        assert_eq!(as_string_list(&json!([])), Some(vec![]));
        assert_eq!(
            as_string_list(&json!(["a", "b"])),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_string_list_rejects_other_shapes() {
        assert_eq!(as_string_list(&json!(["a", 1])), None);
        assert_eq!(as_string_list(&json!("a")), None);
        assert_eq!(as_string_list(&json!({"a": "b"})), None);
        assert_eq!(as_string_list(&Value::Null), None);
    }

    #[test]
    fn test_entry_requires_string_tag_and_note() {
        assert!(SuggestionEntry::from_value(&json!({"tag": "x", "note": "n"})).is_some());
        assert!(SuggestionEntry::from_value(&json!({"tag": "x"})).is_none());
        assert!(SuggestionEntry::from_value(&json!({"tag": "x", "note": 3})).is_none());
        assert!(SuggestionEntry::from_value(&json!("x")).is_none());
    }

    #[test]
    fn test_entry_serializes_tag_then_note() {
        let entry =
            SuggestionEntry::from_value(&json!({"note": "n", "score": 0.9, "tag": "x"})).unwrap();
        let rendered = serde_json::to_value(&entry).unwrap();
        let keys: Vec<&String> = rendered.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["tag", "note"]);
    }

    #[test]
    fn test_probe_variants() {
        let structured = json!([{"tag": "a", "note": "n"}]);
        assert!(matches!(
            SuggestTags::probe(structured.as_array().unwrap()),
            SuggestTags::Structured(ref e) if e.len() == 1
        ));

        let plain = json!(["z", "a"]);
        assert_eq!(
            SuggestTags::probe(plain.as_array().unwrap()),
            SuggestTags::Plain(vec!["z".to_string(), "a".to_string()])
        );

        let mixed = json!([{"tag": "a", "note": "n"}, "b"]);
        assert_eq!(
            SuggestTags::probe(mixed.as_array().unwrap()),
            SuggestTags::Unrecognized
        );
    }
}
