//! Structured profile served by the page and the JSON API

use serde::{Deserialize, Serialize};

/// Resume profile classified from merged paragraphs
///
/// Field names are part of the `/api/resume` contract and of the cached
/// JSON value, so they must not be renamed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Merged document title
    pub title: String,
    /// First paragraph, or the title when there are no paragraphs
    pub name: String,
    /// First paragraph that matched no other bucket
    pub summary: String,
    /// LinkedIn URL (or the whole paragraph when it holds no URL)
    pub linkedin: String,
    /// GitHub URL (or the whole paragraph when it holds no URL)
    pub github: String,
    /// Project-like lines in scan order
    pub projects: Vec<String>,
    /// Unclassified paragraphs in scan order
    pub paragraphs: Vec<String>,
}

impl Profile {
    /// Serialize for the cache
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a cached value
    pub fn from_json(raw: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let profile = Profile {
            title: "Jane Doe".into(),
            name: "Jane Doe".into(),
            projects: vec!["Project: X".into()],
            ..Default::default()
        };

        let value = serde_json::to_value(&profile).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["github", "linkedin", "name", "paragraphs", "projects", "summary", "title"]
        );
    }

    #[test]
    fn test_cached_value_parses_back() {
        let profile = Profile {
            title: "T".into(),
            name: "N".into(),
            summary: "S".into(),
            ..Default::default()
        };
        let raw = profile.to_json().unwrap();
        assert_eq!(Profile::from_json(&raw).unwrap(), profile);
        assert!(Profile::from_json("not json").is_err());
    }
}
