//! Art mapping document
//!
//! The mapping is a JSON object whose keys are output filenames and whose
//! values are records naming the source image:
//!
//! ```json
//! {
//!   "1.png": { "image": "the-raven.jpg", "title": "The Raven" },
//!   "2.png": { "image": "annabel-lee.jpg" }
//! }
//! ```
//!
//! Entries keep document order. Fields other than `image` are carried along
//! untouched.

mod serialization;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, map};

/// A single source record from the mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtRecord {
    /// Source filename, relative to the input directory
    pub image: String,

    /// Any other fields present on the record
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ArtRecord {
    /// Create a record with only an image field
    #[cfg(test)]
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// One key/record pair
#[derive(Debug, Clone, PartialEq)]
pub struct ArtEntry {
    /// Output filename
    pub key: String,
    pub record: ArtRecord,
}

/// Ordered mapping from output filename to source record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtMap {
    entries: Vec<ArtEntry>,
}

impl ArtMap {
    /// Load and parse the mapping document at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| map::read_failed(path, e))?;
        Self::parse(&content).map_err(|e| map::parse_failed(path, e))
    }

    /// Parse a mapping from a JSON string
    #[cfg(test)]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::parse(json)?)
    }

    fn parse(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn entries(&self) -> &[ArtEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ArtMap {
    type Item = &'a ArtEntry;
    type IntoIter = std::slice::Iter<'a, ArtEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'de> Deserialize<'de> for ArtMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = serialization::deserialize_entries(deserializer)?;
        Ok(Self { entries })
    }
}
