//! Source validation for the migrate operation
//!
//! Every entry is checked before anything is copied. All missing sources are
//! collected so a single run reports the complete list.

use std::path::{Path, PathBuf};

use crate::config::MigrationPaths;
use crate::error::{ArtmapError, Result};
use crate::mapping::{ArtEntry, ArtMap};

/// One validated copy: source image to renamed destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyStep {
    pub key: String,
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Validated copies in mapping order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyPlan {
    steps: Vec<CopyStep>,
}

impl CopyPlan {
    pub fn steps(&self) -> &[CopyStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Check that every source image exists and build the copy plan
///
/// `on_entry` is called for each entry before its source is checked.
pub fn validate_sources<F>(map: &ArtMap, paths: &MigrationPaths, mut on_entry: F) -> Result<CopyPlan>
where
    F: FnMut(&ArtEntry),
{
    let mut steps = Vec::with_capacity(map.len());
    let mut missing = Vec::new();

    for entry in map {
        on_entry(entry);

        let source = paths.source_for(&entry.record.image);
        if !source.exists() {
            missing.push(source);
            continue;
        }

        steps.push(CopyStep {
            key: entry.key.clone(),
            source,
            destination: paths.destination_for(&entry.key),
        });
    }

    if !missing.is_empty() {
        return Err(ArtmapError::MissingImages { paths: missing });
    }

    Ok(CopyPlan { steps })
}

/// Mapping keys that carry no file extension
pub fn keys_without_extension(map: &ArtMap) -> Vec<&str> {
    map.entries()
        .iter()
        .map(|entry| entry.key.as_str())
        .filter(|key| Path::new(key).extension().is_none())
        .collect()
}
