//! Per-path page metadata for `<head>` and social sharing tags.
//!
//! Loaded once per build from `meta_data.json`, a map from page path
//! (leading slash, e.g. `/accommodaties`) to a metadata record. A path
//! without an entry is not an error: lookup returns `None` and the head
//! writer omits the corresponding tags.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Social sharing image reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialImage {
    pub src: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default, rename = "type")]
    pub mime_type: Option<String>,
}

/// Metadata record for one page path.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub og_title: Option<String>,
    #[serde(default)]
    pub og_desc: Option<String>,
    #[serde(default)]
    pub og_url: Option<String>,
    #[serde(default)]
    pub og_image: Option<SocialImage>,
}

/// All page metadata, keyed by exact page path.
#[derive(Debug, Clone, Default)]
pub struct MetadataStore {
    entries: HashMap<String, PageMetadata>,
}

impl MetadataStore {
    /// Parse the store from a JSON string.
    pub fn from_str(json: &str) -> Result<Self, serde_json::Error> {
        let entries = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Load the store from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Invalid metadata file {}", path.display()))
    }

    /// Look up metadata by exact path string. `None` means the page has no
    /// entry; callers render without the tags instead of failing.
    pub fn lookup(&self, path: &str) -> Option<&PageMetadata> {
        self.entries.get(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORE: &str = r#"{
        "/indonesie": {
            "title": "Travel Indonesia",
            "description": "Beaches, jungles and volcanoes",
            "ogTitle": "Travel Indonesia",
            "ogDesc": "Beaches, jungles and volcanoes",
            "ogUrl": "https://www.example.com/indonesie/",
            "ogImage": {
                "src": "/assets/header/blogs.jpg",
                "width": 2500,
                "height": 1667,
                "type": "image/jpeg"
            }
        },
        "/accommodaties": {
            "title": "Where to stay",
            "description": "Our favorite places to sleep"
        }
    }"#;

    #[test]
    fn test_load_and_lookup() {
        let store = MetadataStore::from_str(STORE).unwrap();
        assert_eq!(store.len(), 2);

        let meta = store.lookup("/indonesie").unwrap();
        assert_eq!(meta.title.as_deref(), Some("Travel Indonesia"));
        assert_eq!(meta.og_url.as_deref(), Some("https://www.example.com/indonesie/"));

        let image = meta.og_image.as_ref().unwrap();
        assert_eq!(image.src, "/assets/header/blogs.jpg");
        assert_eq!(image.width, Some(2500));
        assert_eq!(image.mime_type.as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn test_partial_record() {
        let store = MetadataStore::from_str(STORE).unwrap();
        let meta = store.lookup("/accommodaties").unwrap();

        assert_eq!(meta.title.as_deref(), Some("Where to stay"));
        assert_eq!(meta.og_title, None);
        assert_eq!(meta.og_image, None);
    }

    #[test]
    fn test_unknown_path_is_none() {
        let store = MetadataStore::from_str(STORE).unwrap();
        assert!(store.lookup("/nowhere").is_none());
        // Lookup is exact: no trailing-slash normalization
        assert!(store.lookup("/indonesie/").is_none());
    }

    #[test]
    fn test_empty_store() {
        let store = MetadataStore::from_str("{}").unwrap();
        assert!(store.is_empty());
        assert!(store.lookup("/indonesie").is_none());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = MetadataStore::load(&dir.path().join("meta_data.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meta_data.json");
        std::fs::write(&path, STORE).unwrap();

        let store = MetadataStore::load(&path).unwrap();
        assert_eq!(store.len(), 2);
    }
}
