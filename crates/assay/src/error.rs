// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for loading configuration.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error(
        "unsupported configuration version {version} in {} (supported: {supported})",
        .path.display()
    )]
    UnsupportedVersion {
        path: PathBuf,
        version: i64,
        supported: i64,
    },
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
