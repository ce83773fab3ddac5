//! Common test utilities for artmap integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Mapping path used by the binary when no flag or env var is given
pub const DEFAULT_MAP: &str = "scripts/poe_nft_art_map.json";

/// Input directory used by the binary by default
pub const DEFAULT_INPUT: &str = "images/edgar-allan-poe-art";

/// Output directory used by the binary by default
pub const DEFAULT_OUTPUT: &str = "images/edgar-allan-poe-nft";

/// A test workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &[u8]) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> Vec<u8> {
        std::fs::read(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write the mapping document at the default location
    pub fn write_map(&self, json: &str) {
        self.write_file(DEFAULT_MAP, json.as_bytes());
    }

    /// Write a source image into the default input directory
    pub fn write_image(&self, name: &str, content: &[u8]) {
        self.write_file(&format!("{DEFAULT_INPUT}/{name}"), content);
    }

    /// Path of a file in the default output directory, relative to the workspace
    pub fn output(name: &str) -> String {
        format!("{DEFAULT_OUTPUT}/{name}")
    }

    /// Names of the files in the default output directory, sorted
    pub fn output_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path.join(DEFAULT_OUTPUT))
            .expect("Failed to read output directory")
            .map(|entry| {
                entry
                    .expect("Failed to read directory entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// artmap command running inside `workspace`, isolated from developer env overrides
#[allow(deprecated)]
pub fn artmap_cmd_for_workspace(workspace: &TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("artmap").expect("Failed to find artmap binary");
    cmd.current_dir(&workspace.path);
    cmd.env_remove("ARTMAP_MAP");
    cmd.env_remove("ARTMAP_INPUT_DIR");
    cmd.env_remove("ARTMAP_OUTPUT_DIR");
    cmd
}
