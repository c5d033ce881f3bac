use anyhow::{bail, Result};
use std::collections::HashSet;

/// Language tags the army builder publishes dumps for by default.
pub const DEFAULT_LANGUAGES: &[&str] = &["en", "es", "fr"];

/// The set of supported language tags, validated once at startup.
///
/// The first tag is the reference language: structural (language-invariant)
/// fields are read from that snapshot only, while display names are merged
/// across every configured language.
#[derive(Debug, Clone)]
pub struct Languages {
    tags: Vec<String>,
}

impl Languages {
    pub fn new(tags: Vec<String>) -> Result<Self> {
        if tags.is_empty() {
            bail!("at least one language tag is required");
        }

        let mut seen = HashSet::new();
        for tag in &tags {
            if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_lowercase()) {
                bail!(
                    "invalid language tag {:?} (expected lowercase ASCII, e.g. \"en\")",
                    tag
                );
            }
            if !seen.insert(tag.as_str()) {
                bail!("duplicate language tag: {}", tag);
            }
        }

        Ok(Self { tags })
    }

    pub fn default_set() -> Self {
        Self {
            tags: DEFAULT_LANGUAGES.iter().map(ToString::to_string).collect(),
        }
    }

    /// The reference language for structural fields.
    pub fn reference(&self) -> &str {
        &self.tags[0]
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_valid_tags() {
        let languages = Languages::new(tags(&["en", "es", "fr"])).unwrap();
        assert_eq!(languages.reference(), "en");
        assert_eq!(languages.len(), 3);
    }

    #[test]
    fn test_empty_list_rejected() {
        assert!(Languages::new(Vec::new()).is_err());
    }

    #[test]
    fn test_malformed_tag_rejected() {
        assert!(Languages::new(tags(&["en", "ES"])).is_err());
        assert!(Languages::new(tags(&[""])).is_err());
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        assert!(Languages::new(tags(&["en", "en"])).is_err());
    }
}
