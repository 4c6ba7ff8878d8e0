//! Heuristic classification of merged paragraphs into a [`Profile`]

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{MergedDocument, Profile};

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("valid URL pattern"));

static PROJECT_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bproject\b").expect("valid project pattern"));

static NUMBERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.").expect("valid numbered item pattern"));

/// Bullet glyphs, including the UTF-8 bullet read back as cp1252
const BULLETS: [&str; 2] = ["\u{2022}", "\u{e2}\u{20ac}\u{a2}"];

/// Bucket a paragraph was assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Linkedin,
    Github,
    Project,
    Summary,
    Other,
}

/// Classifies paragraphs into profile fields
///
/// Rules are tried in order for each paragraph after the first:
/// linkedin, github, project, summary, other. The linkedin, github and
/// summary slots are filled once; later candidates fall through.
pub struct ProfileExtractor;

impl ProfileExtractor {
    /// Build a profile from a merged document
    pub fn extract(merged: &MergedDocument) -> Profile {
        let mut profile = Profile {
            title: merged.title.clone(),
            name: merged
                .paragraphs
                .first()
                .cloned()
                .unwrap_or_else(|| merged.title.clone()),
            ..Default::default()
        };

        for para in merged.paragraphs.iter().skip(1) {
            let bucket = Self::classify(&profile, para);
            let trimmed = para.trim().to_string();
            match bucket {
                Bucket::Linkedin => profile.linkedin = link_value(para),
                Bucket::Github => profile.github = link_value(para),
                Bucket::Project => profile.projects.push(trimmed),
                Bucket::Summary => profile.summary = trimmed,
                Bucket::Other => profile.paragraphs.push(trimmed),
            }
        }

        profile
    }

    /// Pick the bucket for one paragraph given what is already filled
    pub fn classify(profile: &Profile, para: &str) -> Bucket {
        let low = para.to_lowercase();

        if profile.linkedin.is_empty() && low.contains("linkedin") {
            return Bucket::Linkedin;
        }
        if profile.github.is_empty() && low.contains("github") {
            return Bucket::Github;
        }
        if is_project_line(para) {
            return Bucket::Project;
        }
        if profile.summary.is_empty() {
            Bucket::Summary
        } else {
            Bucket::Other
        }
    }
}

/// Lines that read like project entries or list items
pub fn is_project_line(para: &str) -> bool {
    let trimmed = para.trim();
    PROJECT_WORD.is_match(para)
        || trimmed.starts_with('-')
        || BULLETS.iter().any(|b| para.contains(b))
        || NUMBERED_ITEM.is_match(trimmed)
}

/// First http(s) URL in the paragraph, else the trimmed paragraph
fn link_value(para: &str) -> String {
    URL_PATTERN
        .find(para)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| para.trim().to_string())
}
