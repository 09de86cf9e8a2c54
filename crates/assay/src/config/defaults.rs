// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Name of the configuration file looked up in a project root.
pub const FILE_NAME: &str = "assay.toml";

/// The only configuration format version understood.
pub const VERSION: i64 = 1;

/// Fail-fast mode is off unless requested.
pub const FAIL_FAST: bool = false;
