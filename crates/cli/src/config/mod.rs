// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `yalp-grok.toml` configuration.
//!
//! ```toml
//! version = 1
//! patterns_dir = ["patterns"]
//!
//! [patterns]
//! ID = "%{WORD}-%{INT}"
//! ```

pub mod defaults;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, GrokError};
use crate::pattern::Registry;

/// Parsed configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config schema version (must be 1).
    #[serde(default = "Config::default_version")]
    pub version: i64,

    /// Inline custom patterns, merged over the built-ins.
    #[serde(default)]
    pub patterns: BTreeMap<String, String>,

    /// Definition files or directories, merged after inline patterns.
    /// Relative paths are resolved against the config file's directory.
    #[serde(default)]
    pub patterns_dir: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            patterns: BTreeMap::new(),
            patterns_dir: Vec::new(),
        }
    }
}

impl Config {
    fn default_version() -> i64 {
        defaults::VERSION
    }

    /// Built-ins, then inline patterns, then every `patterns_dir` source.
    pub fn build_registry(&self) -> Result<Registry, GrokError> {
        let mut registry = Registry::with_builtins();
        registry.extend(&self.patterns)?;
        for source in &self.patterns_dir {
            registry.load_source(source)?;
        }
        Ok(registry)
    }
}

/// Parse config content. `path` locates relative `patterns_dir` entries.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if config.version != defaults::VERSION {
        return Err(ConfigError::UnsupportedVersion {
            path: path.to_path_buf(),
            version: config.version,
            expected: defaults::VERSION,
        });
    }

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    for dir in &mut config.patterns_dir {
        if dir.is_relative() {
            *dir = base.join(&*dir);
        }
    }

    Ok(config)
}

/// Read and parse a config file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&content, path)?;
    tracing::debug!(
        "loaded config {} ({} inline pattern(s), {} source(s))",
        path.display(),
        config.patterns.len(),
        config.patterns_dir.len()
    );
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
