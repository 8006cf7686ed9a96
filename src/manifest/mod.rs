//! Manifest file I/O
//!
//! Thin collaborators around the filesystem: read a package.json into a
//! JSON object, serialize with two-space indentation, and write with a
//! trailing newline. The only validation is that the input parses and its
//! top level is an object.

use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::Path;

/// A parsed manifest: top-level keys to arbitrary JSON values.
///
/// Key order follows the source file, so cleaned output keeps the
/// original relative order of retained fields.
pub type Manifest = Map<String, Value>;

/// Error types for manifest I/O
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Manifest root is not a JSON object: {path}")]
    NotAnObject { path: String },
}

/// Read and parse a manifest file.
pub fn read_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let contents = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&contents)?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ManifestError::NotAnObject {
            path: path.display().to_string(),
        }),
    }
}

/// Serialize a manifest as two-space-indented JSON with a trailing newline.
pub fn to_pretty_json(manifest: &Manifest) -> Result<String, ManifestError> {
    let json = serde_json::to_string_pretty(manifest)?;
    Ok(format!("{}\n", json))
}

/// Write a manifest to a file.
///
/// Serialization happens before the file is touched, so a failure leaves
/// no partial output behind.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<(), ManifestError> {
    let json = to_pretty_json(manifest)?;
    fs::write(path, json)?;
    Ok(())
}
