//! Field-set resolution
//!
//! Decides which fields to remove: an explicit CLI list always wins, then
//! a discovered clean-publish configuration, then the empty default.
//! Discovery itself lives in [`discover`] and is passed into the resolver
//! as a closure so callers and tests can substitute their own lookup.

mod discover;

pub use discover::{discover_config, load_config_file, DiscoveredConfig};

use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;

/// Error types for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse JSON config: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Failed to parse TOML config: {0}")]
    ParseToml(#[from] toml::de::Error),

    #[error("No \"clean-publish\" section in {path}")]
    MissingSection { path: String },
}

/// A clean-publish configuration record.
///
/// Loaded from `.clean-publish.toml`, `.clean-publish.json`, or a
/// `"clean-publish"` key inside a `package.json`. Only `fields` is
/// consumed here; unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Top-level manifest fields to remove
    #[serde(default)]
    pub fields: Vec<String>,
}

/// Where the effective field set came from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum FieldOrigin {
    Cli,
    Config,
    Default,
}

/// The resolved field set with provenance
#[derive(Debug, Clone)]
pub struct ResolvedFields {
    /// Field names to remove from the manifest
    pub fields: Vec<String>,

    /// Origin of this field set
    pub origin: FieldOrigin,

    /// Config file path (None for cli/default origins)
    pub source: Option<PathBuf>,
}

/// Resolve the effective field set.
///
/// An explicit list is returned verbatim, even when empty, without
/// invoking the lookup. Otherwise the lookup runs; a missing
/// configuration yields the empty default, while a configuration that
/// exists but fails to load propagates as an error.
pub fn resolve_fields<F>(
    explicit: Option<Vec<String>>,
    lookup: F,
) -> Result<ResolvedFields, ConfigError>
where
    F: FnOnce() -> Result<Option<DiscoveredConfig>, ConfigError>,
{
    if let Some(fields) = explicit {
        return Ok(ResolvedFields {
            fields,
            origin: FieldOrigin::Cli,
            source: None,
        });
    }

    match lookup()? {
        Some(discovered) => Ok(ResolvedFields {
            fields: discovered.config.fields,
            origin: FieldOrigin::Config,
            source: Some(discovered.path),
        }),
        None => Ok(ResolvedFields {
            fields: Vec::new(),
            origin: FieldOrigin::Default,
            source: None,
        }),
    }
}
