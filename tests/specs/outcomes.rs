// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::cell::Cell;
use std::fmt;

use crate::prelude::*;

#[derive(Debug)]
struct Disconnected;

impl fmt::Display for Disconnected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "connection closed")
    }
}

impl std::error::Error for Disconnected {}

/// > A body that asserts nothing and does not error passes.
#[test]
fn empty_body_passes() {
    let (test, recorder) = run(false, |_| Ok(()));
    assert_eq!(test.result(), Some(TestResult::success()));
    assert_eq!(recorder.events(), ["success:sample"]);
}

/// > A failing check records a failure and fires only the failure callback.
#[test]
fn failing_check_fires_failure() {
    let (test, recorder) = run(false, |assert| {
        assert.is_true(false)?;
        Ok(())
    });
    assert_eq!(failure_message(&test).as_deref(), Some("expected false to be true"));
    assert_eq!(recorder.events(), ["failure:sample"]);
}

/// > The first failure message is kept; later failures and successes are ignored.
#[test]
fn first_failure_message_sticks() {
    let (test, _) = run(false, |assert| {
        assert.that(1).is_equal_to(2)?;
        assert.is_false(true)?;
        assert.is_true(true)?;
        Ok(())
    });
    assert_eq!(failure_message(&test).as_deref(), Some("expected 1 to be equal to 2"));
}

/// > An error escaping the body fires the error callback.
#[test]
fn escaping_error_fires_error() {
    let (test, recorder) = run(false, |assert| {
        assert.is_true(true)?;
        Err(Disconnected.into())
    });
    assert!(test.is_error());
    assert_eq!(test.result().and_then(|r| r.detail()).as_deref(), Some("connection closed"));
    assert_eq!(recorder.events(), ["error:sample"]);
}

/// > A panic escaping the body is an error, not a crash.
#[test]
fn escaping_panic_fires_error() {
    let (test, recorder) = run(false, |_| panic!("index out of bounds"));
    assert_eq!(
        test.result(),
        Some(TestResult::error(ErrorCause::Panicked("index out of bounds".into())))
    );
    assert_eq!(recorder.events(), ["error:sample"]);
}

/// > An earlier failure outranks an error that escapes afterwards.
#[test]
fn failure_outranks_later_error() {
    let (test, recorder) = run(false, |assert| {
        assert.is_empty(vec![1])?;
        Err(Disconnected.into())
    });
    assert_eq!(failure_message(&test).as_deref(), Some("expected [1] to be empty"));
    assert_eq!(recorder.events(), ["failure:sample"]);
}

/// > A test without a body is pending and runs no code.
#[test]
fn test_without_body_is_pending() {
    let recorder = Recorder::new();
    let test = Test::without_body("todo", recorder.clone());

    test.run(&FailFast::disabled(), &I18n::default());

    assert_eq!(test.result(), Some(TestResult::pending_no_body()));
    assert!(test.is_pending());
    assert!(!test.is_explicitly_marked_pending());
    assert_eq!(recorder.events(), ["pending:todo"]);
}

/// > In fail-fast mode, checks after the first failure have no side effects.
#[test]
fn fail_fast_stops_later_side_effects() {
    let effects = Rc::new(Cell::new(0));
    let counted = Rc::clone(&effects);

    let (test, recorder) = run(true, move |assert| {
        let _ = assert.is_true(false);
        let _ = assert
            .that(|| counted.set(counted.get() + 1))
            .does_not_raise_any_errors();
        Ok(())
    });

    assert_eq!(effects.get(), 0);
    assert_eq!(failure_message(&test).as_deref(), Some("expected false to be true"));
    assert_eq!(recorder.events(), ["failure:sample"]);
}

/// > Without fail-fast mode, every check still runs after a failure.
#[test]
fn without_fail_fast_later_checks_run() {
    let effects = Rc::new(Cell::new(0));
    let counted = Rc::clone(&effects);

    let (test, _) = run(false, move |assert| {
        assert.is_true(false)?;
        assert
            .that(|| counted.set(counted.get() + 1))
            .does_not_raise_any_errors()?;
        Ok(())
    });

    assert_eq!(effects.get(), 1);
    assert!(test.is_failure());
}

fn boxed<F>(body: F) -> Body
where
    F: Fn(&Asserter<'_>) -> BodyResult + 'static,
{
    Box::new(body)
}

/// > Exactly one lifecycle callback fires per run.
#[test]
fn exactly_one_callback_per_run() {
    let bodies = vec![
        boxed(|_| Ok(())),
        boxed(|assert| assert.fail().map_err(Into::into)),
        boxed(|_| Err(BodyError::msg("boom"))),
        boxed(|assert| assert.pending_due_to("later").map_err(Into::into)),
    ];
    for body in bodies {
        let recorder = Recorder::new();
        let test = Test::new("sample", body, recorder.clone());
        test.run(&FailFast::disabled(), &I18n::default());
        assert_eq!(recorder.events().len(), 1, "{:?}", recorder.events());
    }
}
