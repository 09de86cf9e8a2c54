// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The reporting capability injected into every assertion.
//!
//! A [`Reporter`] records results into the running [`Test`] and owns the
//! fail-fast abort flag. Once a failure has been reported in fail-fast mode,
//! every later check returns [`Abort`] without evaluating anything.

use std::cell::Cell;

use crate::i18n::Translate;
use crate::result::TestResult;
use crate::test::Test;

/// Returned by checks once fail-fast mode has aborted the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("test body aborted after its first failing assertion")]
pub struct Abort;

/// Outcome of a check as seen by the body. Propagate it with `?`.
pub type Checked = Result<(), Abort>;

pub struct Reporter<'t> {
    test: &'t Test,
    translator: &'t dyn Translate,
    fail_fast: bool,
    aborted: Cell<bool>,
}

impl<'t> Reporter<'t> {
    pub fn new(test: &'t Test, translator: &'t dyn Translate, fail_fast: bool) -> Self {
        Self {
            test,
            translator,
            fail_fast,
            aborted: Cell::new(false),
        }
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.get()
    }

    /// Fails with [`Abort`] once the body has been aborted. Checks call this
    /// before touching the actual value.
    pub fn ensure_running(&self) -> Checked {
        if self.aborted.get() { Err(Abort) } else { Ok(()) }
    }

    /// Record `result` into the test. In fail-fast mode a failure aborts the body.
    pub fn report(&self, result: TestResult) -> Checked {
        self.ensure_running()?;
        let failed = result.is_failure();
        self.test.set_result(result);
        if failed && self.fail_fast {
            tracing::debug!(test = self.test.name(), "first failure in fail fast mode");
            self.aborted.set(true);
            return Err(Abort);
        }
        Ok(())
    }

    /// Report success, or a failure whose message is built only when needed.
    pub fn conclude(&self, was_success: bool, failure_message: impl FnOnce() -> String) -> Checked {
        if was_success {
            self.report(TestResult::success())
        } else {
            self.report(TestResult::failure(failure_message()))
        }
    }

    pub fn translated(&self, key: &str) -> String {
        self.translator.translate(key)
    }

    pub fn translator(&self) -> &'t dyn Translate {
        self.translator
    }
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
