//! Accommodation listings, grouped by destination.
//!
//! The listings live in `accommodations.json` as a map from destination
//! name to its entries. Object key order in JSON is not contractual, so
//! destinations iterate in sorted order for deterministic output.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Image for an accommodation card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Picture {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// Nightly price range in whole euros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PriceRange {
    pub low: u32,
    pub high: u32,
}

/// One recommended place to stay.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Accommodation {
    pub image: Picture,
    pub name: String,
    pub description: String,
    pub prices: PriceRange,
    /// Outbound booking link.
    pub link: String,
}

/// On-disk shape: listings nested under an `accommodations` key.
#[derive(Debug, Deserialize)]
struct AccommodationsFile {
    accommodations: BTreeMap<String, Vec<Accommodation>>,
}

/// All accommodation listings, keyed by destination name.
#[derive(Debug, Clone, Default)]
pub struct AccommodationIndex {
    by_destination: BTreeMap<String, Vec<Accommodation>>,
}

impl AccommodationIndex {
    /// Parse the index from a JSON string.
    pub fn from_str(json: &str) -> Result<Self, serde_json::Error> {
        let file: AccommodationsFile = serde_json::from_str(json)?;
        Ok(Self {
            by_destination: file.accommodations,
        })
    }

    /// Load the index from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Invalid accommodations file {}", path.display()))
    }

    /// Destination names in sorted order.
    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.by_destination.keys().map(String::as_str)
    }

    /// Entries for one destination.
    pub fn get(&self, destination: &str) -> Option<&[Accommodation]> {
        self.by_destination.get(destination).map(Vec::as_slice)
    }

    /// Iterate `(destination, entries)` pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Accommodation])> {
        self.by_destination
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.by_destination.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_destination.is_empty()
    }
}
