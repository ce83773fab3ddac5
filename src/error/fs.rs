//! File system errors

use std::path::Path;

use super::ArtmapError;

/// Creates a directory creation failed error
pub fn create_dir_failed(path: &Path, reason: impl ToString) -> ArtmapError {
    ArtmapError::CreateDirFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a copy failed error
pub fn copy_failed(from: &Path, to: &Path, reason: impl ToString) -> ArtmapError {
    ArtmapError::CopyFailed {
        from: from.display().to_string(),
        to: to.display().to_string(),
        reason: reason.to_string(),
    }
}
