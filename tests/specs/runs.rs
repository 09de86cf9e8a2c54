// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;

use tempfile::TempDir;
use termcolor::NoColor;

use crate::prelude::*;

fn project(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("assay.toml"), config).unwrap();
    dir
}

fn calculator_suite(recorder: &Rc<Recorder>) -> Suite {
    Suite::new("calculator", recorder.clone(), Rc::new(SilentSuite))
        .test("adds", |assert| assert.that(2 + 2).is_equal_to(4).map_err(Into::into))
        .test("divides", |assert| assert.that(7 / 2).is_equal_to(4).map_err(Into::into))
        .test("rounds", |assert| assert.that(2.0_f64 / 3.0).is_near_to(0.6667).map_err(Into::into))
}

struct SilentSuite;

impl SuiteCallbacks for SilentSuite {}

struct SilentRun;

impl RunnerCallbacks for SilentRun {}

/// > Configuration is read from `assay.toml` in the project root.
#[test]
fn configuration_file_enables_fail_fast() {
    let dir = project("version = 1\nfail_fast = true\n");
    let configuration = Configuration::load_from_dir(dir.path()).unwrap();
    let recorder = Recorder::new();

    let summary = Runner::new(configuration, Rc::new(SilentRun))
        .with_suite(calculator_suite(&recorder))
        .run();

    assert_eq!(summary.success, 1);
    assert_eq!(summary.failure, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(recorder.events(), ["success:adds", "failure:divides", "skipped:rounds"]);
}

/// > Without fail-fast mode every test runs.
#[test]
fn default_configuration_runs_everything() {
    let dir = TempDir::new().unwrap();
    let configuration = Configuration::load_from_dir(dir.path()).unwrap();
    let recorder = Recorder::new();

    let summary = Runner::new(configuration, Rc::new(SilentRun))
        .with_suite(calculator_suite(&recorder))
        .run();

    assert_eq!(summary.total(), 3);
    assert_eq!(summary.success, 2);
    assert_eq!(summary.failure, 1);
}

/// > An unsupported configuration version is reported, not ignored.
#[test]
fn unsupported_version_is_an_error() {
    let dir = project("version = 7\n");
    let err = Configuration::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedVersion { version: 7, .. }));
}

/// > The console prints one line per test and records the exit code.
#[test]
fn console_reports_run() {
    let configuration = Configuration::default();
    let ui = Rc::new(ConsoleUi::new(NoColor::new(Vec::new()), configuration.language));
    let suite = Suite::new("strings", ui.clone(), ui.clone())
        .test("upper", |assert| assert.that("abc".to_uppercase()).is_equal_to("ABC").map_err(Into::into))
        .pending_test("unicode", "needs case folding");

    let runner = Runner::new(configuration, ui.clone()).with_suite(suite);
    runner.run();
    drop(runner);

    let ui = Rc::try_unwrap(ui).ok().unwrap();
    assert_eq!(ui.exit_code(), Some(0));
    let output = String::from_utf8(ui.into_inner().into_inner()).unwrap();
    similar_asserts::assert_eq!(
        output.as_str(),
        "strings:\n\
         [PASS] upper\n\
         [WIP] unicode => needs case folding\n\
         Summary of strings:\n  \
         2 Total, 1 passed, 0 failed, 0 errors, 1 pending, 0 skipped\n\n\
         2 Total, 1 passed, 0 failed, 0 errors, 1 pending, 0 skipped\n"
    );
}
