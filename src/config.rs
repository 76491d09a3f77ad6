//! Configuration file for nakedret.
//!
//! The only setting is the maximum function length. It can come from the
//! `-l` flag, from a YAML config file, or fall back to the default; the
//! flag wins over the file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Maximum function length used when neither flag nor file sets one.
pub const DEFAULT_MAX_LINES: u32 = 5;

/// Config file names searched for in the working directory.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &[".nakedret.yaml", "nakedret.yaml"];

/// Contents of a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum number of lines for a function using naked returns.
    #[serde(default)]
    pub max_lines: Option<u32>,
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("reading {}: {}", path.display(), e))
        })?;
        Self::parse_str(&content)
            .map_err(|e| Error::Configuration(format!("{}: {}", path.display(), e)))
    }

    /// Parse a config from YAML text. An empty document is an empty config.
    pub fn parse_str(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Find a config file in `dir`, if there is one.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
        DEFAULT_CONFIG_NAMES
            .iter()
            .map(|name| dir.as_ref().join(name))
            .find(|path| path.is_file())
    }

    /// Load an explicit config, or a discovered one, or nothing.
    pub fn load(explicit: Option<&Path>, search_dir: &Path) -> Result<Option<Self>> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => match Self::discover(search_dir) {
                Some(p) => p,
                None => return Ok(None),
            },
        };
        log::debug!("using config file {}", path.display());
        Self::parse_file(&path).map(Some)
    }
}

/// Pick the maximum function length: flag, then file, then default.
pub fn resolve_max_lines(flag: Option<u32>, config: Option<&Config>) -> u32 {
    flag.or_else(|| config.and_then(|c| c.max_lines))
        .unwrap_or(DEFAULT_MAX_LINES)
}
