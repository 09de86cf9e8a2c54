// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A named group of tests run in declaration order.

use std::ops::{Add, AddAssign};
use std::rc::Rc;

use crate::assertion::Asserter;
use crate::fail_fast::FailFast;
use crate::i18n::Translate;
use crate::result::{ResultKind, TestResult};
use crate::test::{BodyResult, Test, TestCallbacks};

/// Suite-level hooks.
pub trait SuiteCallbacks {
    fn on_start(&self, _suite: &Suite) {}
    fn on_finish(&self, _suite: &Suite, _summary: &Summary) {}
}

/// Count of finished tests per outcome.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub success: usize,
    pub failure: usize,
    pub error: usize,
    /// Implicit and explicit pending.
    pub pending: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn record(&mut self, result: &TestResult) {
        match result.kind() {
            ResultKind::Success => self.success += 1,
            ResultKind::Failure => self.failure += 1,
            ResultKind::Error => self.error += 1,
            ResultKind::PendingImplicit | ResultKind::PendingExplicit => self.pending += 1,
            ResultKind::Skipped => self.skipped += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.success + self.failure + self.error + self.pending + self.skipped
    }

    /// A run succeeds when nothing failed or errored.
    pub fn is_success(&self) -> bool {
        self.failure == 0 && self.error == 0
    }
}

impl Add for Summary {
    type Output = Summary;

    fn add(self, other: Summary) -> Summary {
        Summary {
            success: self.success + other.success,
            failure: self.failure + other.failure,
            error: self.error + other.error,
            pending: self.pending + other.pending,
            skipped: self.skipped + other.skipped,
        }
    }
}

impl AddAssign for Summary {
    fn add_assign(&mut self, other: Summary) {
        *self = *self + other;
    }
}

pub struct Suite {
    name: String,
    tests: Vec<Test>,
    test_callbacks: Rc<dyn TestCallbacks>,
    callbacks: Rc<dyn SuiteCallbacks>,
}

impl Suite {
    pub fn new(
        name: impl Into<String>,
        test_callbacks: Rc<dyn TestCallbacks>,
        callbacks: Rc<dyn SuiteCallbacks>,
    ) -> Self {
        Self {
            name: name.into(),
            tests: Vec::new(),
            test_callbacks,
            callbacks,
        }
    }

    pub fn test<F>(self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&Asserter<'_>) -> BodyResult + 'static,
    {
        let test = Test::new(name, body, Rc::clone(&self.test_callbacks));
        self.with_test(test)
    }

    /// A test whose body is never run; it finishes as skipped.
    pub fn skipped_test<F>(self, name: impl Into<String>, reason: impl Into<String>, body: F) -> Self
    where
        F: Fn(&Asserter<'_>) -> BodyResult + 'static,
    {
        let test = Test::new(name, body, Rc::clone(&self.test_callbacks)).skip(reason);
        self.with_test(test)
    }

    /// A test explicitly declared pending; it has no body to run.
    pub fn pending_test(self, name: impl Into<String>, reason: impl Into<String>) -> Self {
        let test = Test::without_body(name, Rc::clone(&self.test_callbacks)).pending(reason);
        self.with_test(test)
    }

    /// A test declared without a body; it finishes as implicitly pending.
    pub fn test_without_body(self, name: impl Into<String>) -> Self {
        let test = Test::without_body(name, Rc::clone(&self.test_callbacks));
        self.with_test(test)
    }

    pub fn with_test(mut self, test: Test) -> Self {
        self.tests.push(test);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    /// Run every test in order and return the tally.
    ///
    /// Declared skipped/pending tests are short-circuited without running
    /// their body. Once fail-fast mode has registered a failure, every
    /// remaining test is skipped.
    pub fn run(&self, fail_fast: &FailFast, translator: &dyn Translate) -> Summary {
        self.callbacks.on_start(self);
        for test in &self.tests {
            Self::run_test(test, fail_fast, translator);
        }

        let summary = self.summary();
        tracing::debug!(suite = %self.name, ?summary, "suite finished");
        self.callbacks.on_finish(self, &summary);
        summary
    }

    fn run_test(test: &Test, fail_fast: &FailFast, translator: &dyn Translate) {
        if fail_fast.has_failed() {
            let reason = translator.translate("skipped_due_to_fail_fast");
            test.mark_skipped(TestResult::skipped(reason));
            return;
        }
        match test.declared_result() {
            Some(declared) if declared.is_skipped() => test.mark_skipped(declared.clone()),
            Some(declared) => test.mark_pending(declared.clone()),
            None => test.run(fail_fast, translator),
        }
    }

    /// Tally of the tests that have a result.
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for result in self.tests.iter().filter_map(Test::result) {
            summary.record(&result);
        }
        summary
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
