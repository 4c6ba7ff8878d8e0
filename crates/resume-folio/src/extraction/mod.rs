//! Profile extraction from merged resume paragraphs

pub mod profile;

pub use profile::{is_project_line, Bucket, ProfileExtractor};
