//! Resume ingestion: reading .docx files and merging their paragraphs

pub mod merger;
pub mod reader;

pub use merger::{merge_documents, merge_parsed};
pub use reader::DocumentReader;
