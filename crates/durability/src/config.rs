//! Database configuration
//!
//! A single setting selects the persistence mode:
//! - empty `path`: pure in-memory, nothing touches disk
//! - non-empty `path`: file-backed, one snapshot file at that path
//!
//! Configs can be built in code or read from a TOML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use nsdb_core::{Error, Result};

/// Database configuration
///
/// `Default` is the in-memory configuration.
///
/// # Example
///
/// ```toml
/// # Leave unset (or empty) to keep everything in memory
/// path = "/var/lib/myapp/settings.nsdb"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Snapshot file path; empty selects in-memory mode
    #[serde(default)]
    pub path: PathBuf,
}

impl DatabaseConfig {
    /// In-memory configuration (same as `Default`)
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// File-backed configuration persisting to `path`
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Whether a backing file is configured
    pub fn is_persistent(&self) -> bool {
        !self.path.as_os_str().is_empty()
    }

    /// Backing file path, if any
    pub fn path(&self) -> Option<&Path> {
        if self.is_persistent() {
            Some(&self.path)
        } else {
            None
        }
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::InvalidConfig(format!("Failed to parse config: {}", e)))
    }

    /// Read and parse a config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfig(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Default config file content with comments
    pub fn default_toml() -> &'static str {
        r#"# nsdb configuration
#
# Snapshot file path. Leave unset or empty to run purely in memory.
# path = "data.nsdb"
"#
    }
}
