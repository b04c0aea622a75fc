//! Tagreg Common - tag document normalization and vocabulary validation.
//!
//! Two independent, stateless components:
//! - `normalize`: canonicalizes a tag-regulator output document.
//! - `vocabulary`: loads an allowed-tag list from YAML or JSON and checks
//!   that it is a top-level list of strings.

pub mod document;
pub mod error;
pub mod normalize;
pub mod vocabulary;

pub use document::{SuggestTags, SuggestionEntry};
pub use error::VocabularyError;
pub use normalize::{
    normalize_document, normalize_document_with_report, FieldOutcome, NormalizeReport,
};
pub use vocabulary::{LoadedVocabulary, VocabularyFormat};
