//! Reading and writing `images_list.json`.
//!
//! The file is pretty-printed with 2-space indentation, non-ASCII characters
//! written as-is, and no trailing newline. Writing the same [`Manifest`] twice
//! produces identical bytes.

use crate::types::Manifest;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render the manifest exactly as it is written to disk.
pub fn to_json(manifest: &Manifest) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(manifest)
}

/// Overwrite `path` with the manifest.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<(), ManifestError> {
    let json = to_json(manifest)?;
    fs::write(path, &json)?;
    debug!(bytes = json.len(), "wrote {}", path.display());
    Ok(())
}

/// Parse an existing manifest file. Any key other than `"4"`, `"6"`, `"9"`,
/// or a missing one, is an error.
pub fn read_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Whether the file at `path` already holds exactly `manifest`.
///
/// A missing file or content that does not parse as a manifest (including
/// non UTF-8 bytes) is stale.
/// Any other I/O failure (permission denied, a directory in the way) is
/// returned as an error.
pub fn is_up_to_date(manifest: &Manifest, path: &Path) -> Result<bool, ManifestError> {
    match read_manifest(path) {
        Ok(on_disk) => Ok(on_disk == *manifest),
        Err(ManifestError::Io(e))
            if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::InvalidData) =>
        {
            Ok(false)
        }
        Err(ManifestError::Json(_)) => Ok(false),
        Err(e) => Err(e),
    }
}
