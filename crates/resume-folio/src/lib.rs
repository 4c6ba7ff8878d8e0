//! resume-folio: Portfolio page and JSON API built from .docx resumes
//!
//! Resume documents are read paragraph by paragraph, merged with cross-file
//! deduplication, classified into a structured [`Profile`] and cached in Redis.

pub mod cache;
pub mod config;
pub mod error;
pub mod extraction;
pub mod ingestion;
pub mod render;
pub mod server;
pub mod service;
pub mod types;

pub use config::FolioConfig;
pub use error::{Error, Result};
pub use types::{
    document::{MergedDocument, ParsedDocument},
    profile::Profile,
};
