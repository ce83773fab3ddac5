//! Path configuration for a migration run
//!
//! Paths come from CLI flags, then `ARTMAP_*` environment variables, then the
//! defaults below. Relative paths resolve against the working directory.

use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Default mapping document
pub const DEFAULT_MAP_PATH: &str = "./scripts/poe_nft_art_map.json";

/// Default directory holding the source images
pub const DEFAULT_INPUT_DIR: &str = "./images/edgar-allan-poe-art/";

/// Default directory receiving the renamed copies
pub const DEFAULT_OUTPUT_DIR: &str = "./images/edgar-allan-poe-nft/";

/// Resolved locations for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationPaths {
    pub map_path: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl MigrationPaths {
    pub fn new(
        map_path: impl Into<PathBuf>,
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            map_path: map_path.into(),
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Source path for an image named in the mapping
    pub fn source_for(&self, image: &str) -> PathBuf {
        self.input_dir.join(image)
    }

    /// Destination path for a mapping key
    pub fn destination_for(&self, key: &str) -> PathBuf {
        self.output_dir.join(key)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl Default for MigrationPaths {
    fn default() -> Self {
        Self::new(DEFAULT_MAP_PATH, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR)
    }
}

impl From<&Cli> for MigrationPaths {
    fn from(cli: &Cli) -> Self {
        Self::new(&cli.map, &cli.input, &cli.output)
    }
}
