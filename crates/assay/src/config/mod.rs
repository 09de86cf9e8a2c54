// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration, read from `assay.toml`.
//!
//! ```toml
//! version = 1
//! fail_fast = true
//! language = "es"
//! color = "never"
//! ```

pub mod defaults;

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::i18n::Language;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    /// Configuration format version; must be 1.
    pub version: i64,

    /// Stop each test at its first failure and skip the tests after it.
    #[serde(default = "Configuration::default_fail_fast")]
    pub fail_fast: bool,

    /// Language of failure messages and console output.
    #[serde(default)]
    pub language: Language,

    /// Console color mode.
    #[serde(default)]
    pub color: ColorMode,
}

/// When the console writes colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when writing to a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            version: defaults::VERSION,
            fail_fast: Self::default_fail_fast(),
            language: Language::default(),
            color: ColorMode::default(),
        }
    }
}

impl Configuration {
    fn default_fail_fast() -> bool {
        defaults::FAIL_FAST
    }

    /// Read and parse the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = parse(&content, path)?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Load `assay.toml` from `root`, or the defaults when there is none.
    pub fn load_from_dir(root: &Path) -> Result<Self> {
        let path = root.join(defaults::FILE_NAME);
        if !path.is_file() {
            tracing::debug!(root = %root.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }
}

/// Parse configuration content. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<Configuration> {
    let config: Configuration = toml::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if config.version != defaults::VERSION {
        return Err(ConfigError::UnsupportedVersion {
            path: path.to_path_buf(),
            version: config.version,
            supported: defaults::VERSION,
        });
    }

    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
