// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assay::*;
pub use std::rc::Rc;

use std::cell::RefCell;

/// Records lifecycle events as `"<event>:<test>"`.
#[derive(Default)]
pub struct Recorder {
    events: RefCell<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    fn push(&self, event: &str, test: &Test) {
        self.events.borrow_mut().push(format!("{event}:{}", test.name()));
    }
}

impl TestCallbacks for Recorder {
    fn on_pending(&self, test: &Test) {
        self.push("pending", test);
    }

    fn on_skipped(&self, test: &Test) {
        self.push("skipped", test);
    }

    fn on_success(&self, test: &Test) {
        self.push("success", test);
    }

    fn on_failure(&self, test: &Test) {
        self.push("failure", test);
    }

    fn on_error(&self, test: &Test) {
        self.push("error", test);
    }
}

/// Run a single test named "sample" with English messages.
pub fn run<F>(fail_fast: bool, body: F) -> (Test, Rc<Recorder>)
where
    F: Fn(&Asserter<'_>) -> BodyResult + 'static,
{
    let recorder = Recorder::new();
    let test = Test::new("sample", body, recorder.clone());
    test.run(&FailFast::new(fail_fast), &I18n::default());
    (test, recorder)
}

/// The failure message of `test`, if it failed.
pub fn failure_message(test: &Test) -> Option<String> {
    match test.result() {
        Some(TestResult::Failure { message }) => Some(message),
        _ => None,
    }
}
