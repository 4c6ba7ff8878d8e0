//! Core types for the resume pipeline

pub mod document;
pub mod profile;

pub use document::{MergedDocument, ParsedDocument, FALLBACK_TITLE};
pub use profile::Profile;
