// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fail-fast mode shared by every test of a run.

use std::cell::Cell;

/// Whether the first failure stops the run, and whether it has happened.
///
/// Inside a body, the first failing check aborts the rest of the body.
/// Across tests, the suite skips every test after a registered failure.
#[derive(Debug, Default)]
pub struct FailFast {
    enabled: bool,
    failed: Cell<bool>,
}

impl FailFast {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            failed: Cell::new(false),
        }
    }

    pub fn enabled() -> Self {
        Self::new(true)
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// True once a failure was registered while the mode is enabled.
    pub fn has_failed(&self) -> bool {
        self.enabled && self.failed.get()
    }

    pub fn register_failure(&self) {
        self.failed.set(true);
    }
}

#[cfg(test)]
#[path = "fail_fast_tests.rs"]
mod tests;
