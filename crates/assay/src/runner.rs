// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runs suites one after another under a single configuration.

use std::rc::Rc;

use crate::config::Configuration;
use crate::fail_fast::FailFast;
use crate::i18n::I18n;
use crate::suite::{Suite, Summary};

/// Run-level hooks. `on_finish` fires first, then exactly one of
/// `on_success` or `on_failure`.
pub trait RunnerCallbacks {
    fn on_finish(&self, _summary: &Summary) {}
    fn on_success(&self, _summary: &Summary) {}
    fn on_failure(&self, _summary: &Summary) {}
}

pub struct Runner {
    configuration: Configuration,
    suites: Vec<Suite>,
    callbacks: Rc<dyn RunnerCallbacks>,
}

impl Runner {
    pub fn new(configuration: Configuration, callbacks: Rc<dyn RunnerCallbacks>) -> Self {
        Self {
            configuration,
            suites: Vec::new(),
            callbacks,
        }
    }

    pub fn with_suite(mut self, suite: Suite) -> Self {
        self.suites.push(suite);
        self
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn suites(&self) -> &[Suite] {
        &self.suites
    }

    /// Run every suite and return the combined tally.
    ///
    /// Fail-fast state is shared across suites: after the first failure,
    /// the remaining tests of every later suite are skipped.
    pub fn run(&self) -> Summary {
        let fail_fast = FailFast::new(self.configuration.fail_fast);
        let translator = I18n::new(self.configuration.language);

        let mut total = Summary::default();
        for suite in &self.suites {
            total += suite.run(&fail_fast, &translator);
        }

        tracing::debug!(?total, "run finished");
        self.callbacks.on_finish(&total);
        if total.is_success() {
            self.callbacks.on_success(&total);
        } else {
            self.callbacks.on_failure(&total);
        }
        total
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
