// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;

use proptest::prelude::*;
use similar_asserts::assert_eq;
use yare::parameterized;

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct RequestFailed {
    status: u16,
}

impl fmt::Display for RequestFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request failed with status {}", self.status)
    }
}

fn request(status: u16) -> Result<&'static str, RequestFailed> {
    if status == 200 { Ok("body") } else { Err(RequestFailed { status }) }
}

/// > `is_near_to` rounds the actual value to the given number of digits.
#[parameterized(
    four_digits = { 4, true },
    two_digits = { 2, false },
)]
fn near_to_precision(digits: usize, passes: bool) {
    let (test, _) = run(false, move |assert| {
        assert.that(3.14159_f64).is_near_to_with_precision(3.1416, digits)?;
        Ok(())
    });
    similar_asserts::assert_eq!(test.is_success(), passes);
}

/// > `raises` accepts a pattern matched against the raised value's text.
#[test]
fn raises_with_pattern() {
    let (test, _) = run(false, |assert| {
        assert
            .that(|| request(503))
            .raises(ErrorExpectation::pattern(r"status 5\d\d").unwrap())?;
        assert.that(|| request(200)).does_not_raise_any_errors()?;
        Ok(())
    });
    assert!(test.is_success());
}

/// > `raises` with an exact value reports what was raised instead.
#[test]
fn raises_exact_reports_mismatch() {
    let (test, _) = run(false, |assert| {
        assert
            .that(|| request(404))
            .raises(ErrorExpectation::exact(RequestFailed { status: 500 }))?;
        Ok(())
    });
    assert_eq!(
        failure_message(&test).as_deref(),
        Some(
            "expected expecting error RequestFailed { status: 500 } to happen, \
             but got RequestFailed { status: 404 } instead"
        )
    );
}

/// > Failure messages follow the configured language.
#[test]
fn spanish_failure_message() {
    let test = Test::new(
        "es",
        |assert| assert.that(vec![1, 2]).includes(3).map_err(Into::into),
        Rc::new(SilentCallbacks),
    );
    test.run(&FailFast::disabled(), &I18n::new(Language::Spanish));
    assert_eq!(
        failure_message(&test).as_deref(),
        Some("se esperaba que [1, 2] incluya a 3")
    );
}

proptest! {
    /// > `is_equal_to` is reflexive.
    #[test]
    fn equality_is_reflexive(values in prop::collection::vec(any::<i64>(), 0..16), text in ".*") {
        let (test, _) = run(false, move |assert| {
            assert.that(values.clone()).is_equal_to(values.clone())?;
            assert.that(text.clone()).is_equal_to(text.clone())?;
            Ok(())
        });
        prop_assert!(test.is_success());
    }

    /// > `includes_exactly` ignores order.
    #[test]
    fn includes_exactly_ignores_order(
        values in prop::collection::vec(any::<u8>(), 0..16),
        seed in any::<usize>(),
    ) {
        let mut shuffled = values.clone();
        if !shuffled.is_empty() {
            let len = shuffled.len();
            shuffled.rotate_left(seed % len);
        }
        shuffled.reverse();
        let (test, _) = run(false, move |assert| {
            assert.that(values.clone()).includes_exactly(shuffled.clone())?;
            Ok(())
        });
        prop_assert!(test.is_success());
    }
}
