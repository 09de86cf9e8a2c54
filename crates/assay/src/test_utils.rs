// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::assertion::Asserter;
use crate::fail_fast::FailFast;
use crate::i18n::I18n;
use crate::runner::RunnerCallbacks;
use crate::suite::{Suite, SuiteCallbacks, Summary};
use crate::test::{BodyResult, Test, TestCallbacks};

/// Callbacks that record every event as `"<event>:<name>"`.
#[derive(Default)]
pub struct RecordingCallbacks {
    events: RefCell<Vec<String>>,
}

impl RecordingCallbacks {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    fn record(&self, event: &str, name: &str) {
        self.events.borrow_mut().push(format!("{event}:{name}"));
    }
}

impl TestCallbacks for RecordingCallbacks {
    fn on_pending(&self, test: &Test) {
        self.record("pending", test.name());
    }

    fn on_skipped(&self, test: &Test) {
        self.record("skipped", test.name());
    }

    fn on_success(&self, test: &Test) {
        self.record("success", test.name());
    }

    fn on_failure(&self, test: &Test) {
        self.record("failure", test.name());
    }

    fn on_error(&self, test: &Test) {
        self.record("error", test.name());
    }
}

impl SuiteCallbacks for RecordingCallbacks {
    fn on_start(&self, suite: &Suite) {
        self.record("suite_start", suite.name());
    }

    fn on_finish(&self, suite: &Suite, _summary: &Summary) {
        self.record("suite_finish", suite.name());
    }
}

impl RunnerCallbacks for RecordingCallbacks {
    fn on_finish(&self, summary: &Summary) {
        self.record("run_finish", &summary.total().to_string());
    }

    fn on_success(&self, _summary: &Summary) {
        self.record("run_success", "");
    }

    fn on_failure(&self, _summary: &Summary) {
        self.record("run_failure", "");
    }
}

/// Build a test named "example" and run it with English messages.
pub fn run_body<F>(fail_fast: bool, body: F) -> (Test, Rc<RecordingCallbacks>)
where
    F: Fn(&Asserter<'_>) -> BodyResult + 'static,
{
    let callbacks = RecordingCallbacks::new();
    let test = Test::new("example", body, callbacks.clone());
    test.run(&FailFast::new(fail_fast), &I18n::default());
    (test, callbacks)
}

/// The failure message recorded by `test`, panicking if it did not fail.
pub fn failure_message(test: &Test) -> String {
    match test.result() {
        Some(crate::result::TestResult::Failure { message }) => message,
        other => panic!("expected a failure, got {other:?}"),
    }
}
