//! clear-package-json - strip fields from a package.json
//!
//! This crate implements `clear-package-json`, a small utility that reads
//! a package manifest, removes a configured set of top-level fields, and
//! writes the cleaned result to stdout or a file.

pub mod clean;
pub mod config;
pub mod manifest;

pub use clean::clear_fields;
pub use config::{resolve_fields, CleanConfig, ConfigError, FieldOrigin, ResolvedFields};
pub use manifest::{read_manifest, to_pretty_json, write_manifest, Manifest, ManifestError};
