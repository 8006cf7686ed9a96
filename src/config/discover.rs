//! Configuration file discovery
//!
//! Walks upward from a start directory looking for a clean-publish
//! configuration. At each level the probe order is:
//! 1. `.clean-publish.toml`
//! 2. `.clean-publish.json`
//! 3. a `"clean-publish"` key inside `package.json`
//!
//! The nearest hit wins. A `package.json` without the key does not stop
//! the walk.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::{CleanConfig, ConfigError};

/// Dotfile config names probed before package.json, in precedence order
const CONFIG_FILE_NAMES: &[&str] = &[".clean-publish.toml", ".clean-publish.json"];

/// Key holding the config inside a package.json
const PACKAGE_JSON_SECTION: &str = "clean-publish";

/// A configuration found on disk, with the path it came from
#[derive(Debug, Clone)]
pub struct DiscoveredConfig {
    /// Path of the file that supplied the config
    pub path: PathBuf,

    /// The parsed configuration record
    pub config: CleanConfig,
}

/// Search upward from `start` for a clean-publish configuration.
///
/// Returns `Ok(None)` when no ancestor directory holds one. A config
/// file that exists but fails to read or parse is an error.
pub fn discover_config(start: &Path) -> Result<Option<DiscoveredConfig>, ConfigError> {
    for dir in start.ancestors() {
        for name in CONFIG_FILE_NAMES {
            let path = dir.join(name);
            if path.is_file() {
                return load_config_file(&path).map(Some);
            }
        }

        let package_json = dir.join("package.json");
        if package_json.is_file() {
            if let Some(config) = package_json_section(&package_json)? {
                return Ok(Some(DiscoveredConfig {
                    path: package_json,
                    config,
                }));
            }
        }
    }

    Ok(None)
}

/// Load a config file named explicitly (the `--config` flag).
///
/// Format follows the file name: `package.json` is read through its
/// `"clean-publish"` key (missing key is an error here, unlike during
/// discovery), a `.toml` extension selects TOML, anything else is JSON.
pub fn load_config_file(path: &Path) -> Result<DiscoveredConfig, ConfigError> {
    if path.file_name().is_some_and(|n| n == "package.json") {
        return match package_json_section(path)? {
            Some(config) => Ok(DiscoveredConfig {
                path: path.to_path_buf(),
                config,
            }),
            None => Err(ConfigError::MissingSection {
                path: path.display().to_string(),
            }),
        };
    }

    let contents = fs::read_to_string(path)?;
    let config: CleanConfig = if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str(&contents)?
    } else {
        serde_json::from_str(&contents)?
    };

    Ok(DiscoveredConfig {
        path: path.to_path_buf(),
        config,
    })
}

/// Read the `"clean-publish"` section of a package.json, if present.
fn package_json_section(path: &Path) -> Result<Option<CleanConfig>, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&contents)?;

    match value.get(PACKAGE_JSON_SECTION) {
        Some(section) => {
            let config: CleanConfig = serde_json::from_value(section.clone())?;
            Ok(Some(config))
        }
        None => Ok(None),
    }
}
