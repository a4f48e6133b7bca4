// Author: kelexine (https://github.com/kelexine)
// config/mod.rs - Global configuration loader

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

/// Represents the structure of the global `config.toml`.
#[derive(Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Names skipped by every walk, on top of the built-in ignore lists.
    pub extra_ignore: Option<Vec<String>>,
    /// Key per-file results by relative path instead of bare file name.
    pub key_by_path: Option<bool>,
    pub parallel: Option<bool>,
}

impl GlobalConfig {
    /// `<config_dir>/jsmetrics/config.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("jsmetrics").join("config.toml"))
    }

    /// Attempt to load the global configuration, returning a default instance if it fails or is missing.
    pub fn load() -> Self {
        Self::default_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no config file");
            return Self::default();
        }
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read config");
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to parse config");
                Self::default()
            }
        }
    }
}
