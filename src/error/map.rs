//! Mapping document errors

use std::path::Path;

use super::ArtmapError;

/// Creates a mapping read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> ArtmapError {
    ArtmapError::MapReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a mapping parse failed error
pub fn parse_failed(path: &Path, reason: impl ToString) -> ArtmapError {
    ArtmapError::MapParseFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
