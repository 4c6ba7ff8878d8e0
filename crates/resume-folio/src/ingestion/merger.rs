//! Order-preserving merge of several resume files

use std::collections::HashSet;

use super::reader::DocumentReader;
use crate::types::{MergedDocument, ParsedDocument, FALLBACK_TITLE};

/// Read every path and merge the results
///
/// Empty path entries are skipped. Unreadable files contribute their
/// placeholder paragraph like any other document.
pub fn merge_documents<S: AsRef<str>>(paths: &[S]) -> MergedDocument {
    let documents = paths
        .iter()
        .map(|p| p.as_ref())
        .filter(|p| !p.is_empty())
        .map(DocumentReader::read);

    merge_parsed(documents)
}

/// Merge already parsed documents, dropping exact duplicate paragraphs
///
/// The title comes from the first document with a non-empty title.
pub fn merge_parsed<I>(documents: I) -> MergedDocument
where
    I: IntoIterator<Item = ParsedDocument>,
{
    let mut title: Option<String> = None;
    let mut seen: HashSet<String> = HashSet::new();
    let mut paragraphs = Vec::new();

    for doc in documents {
        if title.is_none() && !doc.title.is_empty() {
            title = Some(doc.title);
        }

        for para in doc.paragraphs {
            if seen.contains(&para) {
                continue;
            }
            seen.insert(para.clone());
            paragraphs.push(para);
        }
    }

    MergedDocument {
        title: title.unwrap_or_else(|| FALLBACK_TITLE.to_string()),
        paragraphs,
    }
}
