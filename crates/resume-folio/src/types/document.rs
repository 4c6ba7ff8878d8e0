//! Document types produced by the reader and the merger

use serde::{Deserialize, Serialize};

/// Title used when no document yields a non-empty first paragraph
pub const FALLBACK_TITLE: &str = "Resume";

/// Paragraphs read from a single resume file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// First non-empty paragraph, or [`FALLBACK_TITLE`]
    pub title: String,
    /// Trimmed, non-empty paragraphs in document order
    pub paragraphs: Vec<String>,
}

impl ParsedDocument {
    /// Build a document from already trimmed paragraphs
    pub fn from_paragraphs(paragraphs: Vec<String>) -> Self {
        let title = paragraphs
            .first()
            .cloned()
            .unwrap_or_else(|| FALLBACK_TITLE.to_string());
        Self { title, paragraphs }
    }

    /// Placeholder returned when a file cannot be read
    pub fn unreadable(path: &str) -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            paragraphs: vec![format!("Unable to read resume file: {}", path)],
        }
    }
}

/// Paragraphs merged from one or more resume files
///
/// Paragraphs are unique (exact, case-sensitive) and keep the order in which
/// they were first seen across the input files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedDocument {
    /// Title adopted from the first document with a non-empty title
    pub title: String,
    /// Deduplicated paragraphs
    pub paragraphs: Vec<String>,
}
