//! Error types and handling for artmap
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//!
//! Constructors are grouped by error domain:
//! - [`map`]: mapping document errors
//! - [`fs`]: file system errors

pub mod fs;
pub mod map;


use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for artmap operations
#[derive(Error, Diagnostic, Debug)]
pub enum ArtmapError {
    // Mapping document errors
    #[error("Failed to read mapping file: {path}: {reason}")]
    #[diagnostic(
        code(artmap::map::read_failed),
        help("Pass --map or set ARTMAP_MAP to point at the mapping document")
    )]
    MapReadFailed { path: String, reason: String },

    #[error("Failed to parse mapping file: {path}: {reason}")]
    #[diagnostic(
        code(artmap::map::parse_failed),
        help("Expected an object of the form {{\"<output name>\": {{\"image\": \"<source name>\"}}}}")
    )]
    MapParseFailed { path: String, reason: String },

    // Validation errors
    #[error("The following image paths do not exist:\n{}", join_lines(.paths))]
    #[diagnostic(
        code(artmap::validate::missing_images),
        help("Nothing was copied. Fix the mapping or add the images and run again")
    )]
    MissingImages { paths: Vec<PathBuf> },

    // File system errors
    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(artmap::fs::create_dir_failed))]
    CreateDirFailed { path: String, reason: String },

    #[error("Failed to copy {from} to {to}: {reason}")]
    #[diagnostic(
        code(artmap::fs::copy_failed),
        help("Files copied before this one were left in place")
    )]
    CopyFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(artmap::fs::io_error))]
    IoError { message: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(artmap::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

fn join_lines(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<std::io::Error> for ArtmapError {
    fn from(err: std::io::Error) -> Self {
        ArtmapError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ArtmapError {
    fn from(err: serde_json::Error) -> Self {
        ArtmapError::MapParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ArtmapError>;
