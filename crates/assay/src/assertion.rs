// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The check catalogue.
//!
//! A body gets an [`Asserter`]; [`Asserter::that`] wraps an actual value in
//! an [`Assertion`], whose checks compute success or failure and report it
//! through the [`Reporter`]. Every check returns [`Checked`]: `Ok(())` unless
//! fail-fast mode has aborted the body, so `?` stops the body right there.
//!
//! | Check | Available when the actual value is |
//! |---|---|
//! | `is_true`, `is_false` | `bool` |
//! | `is_undefined`, `is_not_undefined` | `Option<T>` |
//! | `is_equal_to`, `is_not_equal_to` (and `_using`) | any `Debug` value |
//! | `includes`, `does_not_include` | a [`Contains`] collection |
//! | `includes_exactly` | an `AsRef<[E]>` sequence |
//! | `is_empty`, `is_not_empty` | a [`Length`] collection |
//! | `raises`, `does_not_raise` | a closure returning [`Raising`] with a `PartialEq` error |
//! | `raises_matching`, `does_not_raise_matching`, `does_not_raise_any_errors` | a closure returning [`Raising`] |
//! | `is_near_to`, `is_near_to_with_precision` | a number convertible to `f64` |

use std::fmt::Debug;

use regex::Regex;

use crate::collection::{Contains, Length, have_same_elements};
use crate::equality::{EqualityCriteria, EqualityStrategy, EqualityVerdict};
use crate::expectation::{
    ErrorExpectation, Raised, Raising, describe_pattern, invoke, pattern_matches,
};
use crate::pretty::pretty_print;
use crate::reporter::{Checked, Reporter};
use crate::result::TestResult;

/// Decimal digits `is_near_to` rounds to.
pub const DEFAULT_PRECISION_DIGITS: usize = 4;

/// Entry point handed to test bodies.
#[derive(Clone, Copy)]
pub struct Asserter<'r> {
    reporter: &'r Reporter<'r>,
}

impl<'r> Asserter<'r> {
    pub fn new(reporter: &'r Reporter<'r>) -> Self {
        Self { reporter }
    }

    pub fn that<T>(&self, actual: T) -> Assertion<'r, T> {
        Assertion {
            reporter: self.reporter,
            actual,
        }
    }

    pub fn is_true(&self, actual: bool) -> Checked {
        self.that(actual).is_true()
    }

    pub fn is_false(&self, actual: bool) -> Checked {
        self.that(actual).is_false()
    }

    pub fn is_undefined<T: Debug>(&self, actual: Option<T>) -> Checked {
        self.that(actual).is_undefined()
    }

    pub fn is_not_undefined<T: Debug>(&self, actual: Option<T>) -> Checked {
        self.that(actual).is_not_undefined()
    }

    pub fn are_equal<T, U>(&self, actual: T, expected: U) -> Checked
    where
        T: PartialEq<U> + Debug,
        U: Debug,
    {
        self.that(actual).is_equal_to(expected)
    }

    pub fn are_not_equal<T, U>(&self, actual: T, expected: U) -> Checked
    where
        T: PartialEq<U> + Debug,
        U: Debug,
    {
        self.that(actual).is_not_equal_to(expected)
    }

    pub fn is_empty<T: Length + Debug>(&self, actual: T) -> Checked {
        self.that(actual).is_empty()
    }

    pub fn is_not_empty<T: Length + Debug>(&self, actual: T) -> Checked {
        self.that(actual).is_not_empty()
    }

    /// Fail the test explicitly with the default message.
    pub fn fail(&self) -> Checked {
        let description = self.reporter.translated("explicitly_failed");
        self.fail_with(description)
    }

    pub fn fail_with(&self, description: impl Into<String>) -> Checked {
        self.reporter.ensure_running()?;
        self.reporter.report(TestResult::failure(description))
    }

    /// Mark the running test as pending. Later outcomes cannot replace it.
    pub fn pending_due_to(&self, reason: impl Into<String>) -> Checked {
        self.reporter.ensure_running()?;
        self.reporter.report(TestResult::explicitly_marked_as_pending(reason))
    }
}

/// A single check in the making: the actual value plus the reporter.
pub struct Assertion<'r, T> {
    reporter: &'r Reporter<'r>,
    actual: T,
}

impl<T: Debug> Assertion<'_, T> {
    // Equality

    pub fn is_equal_to<U: Debug>(self, expected: U) -> Checked
    where
        T: PartialEq<U>,
    {
        self.reporter.ensure_running()?;
        let verdict =
            EqualityStrategy::evaluate(&self.actual, &expected, None, self.reporter.translator());
        self.equality_assertion(&expected, verdict, true)
    }

    pub fn is_not_equal_to<U: Debug>(self, expected: U) -> Checked
    where
        T: PartialEq<U>,
    {
        self.reporter.ensure_running()?;
        let verdict =
            EqualityStrategy::evaluate(&self.actual, &expected, None, self.reporter.translator());
        self.equality_assertion(&expected, verdict, false)
    }

    /// Equality decided by `criteria` instead of `PartialEq`.
    pub fn is_equal_to_using<U: Debug>(
        self,
        expected: U,
        criteria: &dyn EqualityCriteria<T, U>,
    ) -> Checked {
        self.reporter.ensure_running()?;
        let verdict = EqualityStrategy::evaluate_custom(
            &self.actual,
            &expected,
            criteria,
            self.reporter.translator(),
        );
        self.equality_assertion(&expected, verdict, true)
    }

    pub fn is_not_equal_to_using<U: Debug>(
        self,
        expected: U,
        criteria: &dyn EqualityCriteria<T, U>,
    ) -> Checked {
        self.reporter.ensure_running()?;
        let verdict = EqualityStrategy::evaluate_custom(
            &self.actual,
            &expected,
            criteria,
            self.reporter.translator(),
        );
        self.equality_assertion(&expected, verdict, false)
    }

    // Collections

    pub fn includes<N: Debug>(self, item: N) -> Checked
    where
        T: Contains<N>,
    {
        self.reporter.ensure_running()?;
        let included = self.actual.contains_item(&item);
        self.report_assertion_result(included, || {
            format!("{} {}", self.reporter.translated("include"), pretty_print(&item))
        })
    }

    pub fn does_not_include<N: Debug>(self, item: N) -> Checked
    where
        T: Contains<N>,
    {
        self.reporter.ensure_running()?;
        let included = self.actual.contains_item(&item);
        self.report_assertion_result(!included, || {
            format!("{} {}", self.reporter.translated("not_include"), pretty_print(&item))
        })
    }

    /// Succeeds when the actual sequence and `items` have the same elements,
    /// in any order.
    pub fn includes_exactly<E, I>(self, items: I) -> Checked
    where
        T: AsRef<[E]>,
        E: PartialEq + Debug,
        I: IntoIterator<Item = E>,
    {
        self.reporter.ensure_running()?;
        let expected: Vec<E> = items.into_iter().collect();
        let same = have_same_elements(self.actual.as_ref(), &expected);
        self.report_assertion_result(same, || {
            format!("{} {}", self.reporter.translated("include_exactly"), pretty_print(&expected))
        })
    }

    pub fn is_empty(self) -> Checked
    where
        T: Length,
    {
        self.reporter.ensure_running()?;
        let empty = self.actual.length() == 0;
        self.report_assertion_result(empty, || self.reporter.translated("be_empty"))
    }

    pub fn is_not_empty(self) -> Checked
    where
        T: Length,
    {
        self.reporter.ensure_running()?;
        let not_empty = self.actual.length() > 0;
        self.report_assertion_result(not_empty, || self.reporter.translated("be_not_empty"))
    }

    // Private

    fn equality_assertion<U: Debug>(
        &self,
        expected: &U,
        verdict: EqualityVerdict,
        should_be_equal: bool,
    ) -> Checked {
        let succeeded = verdict.comparison_result == should_be_equal;
        match verdict.override_failure_message {
            Some(message) => self.reporter.conclude(succeeded, || message),
            None => self.report_assertion_result(succeeded, || {
                let key = if should_be_equal { "be_equal_to" } else { "be_not_equal_to" };
                format!(
                    "{} {}{}",
                    self.reporter.translated(key),
                    pretty_print(expected),
                    verdict.additional_failure_message
                )
            }),
        }
    }

    /// Report the outcome; failures read "expected <actual> to <matcher message>".
    fn report_assertion_result(
        &self,
        was_success: bool,
        matcher_message: impl FnOnce() -> String,
    ) -> Checked {
        self.reporter.conclude(was_success, || {
            sentence(&[
                self.reporter.translated("expected"),
                pretty_print(&self.actual),
                self.reporter.translated("to"),
                matcher_message(),
            ])
        })
    }
}

// Boolean

impl Assertion<'_, bool> {
    pub fn is_true(self) -> Checked {
        self.boolean_assertion(true, "be_true")
    }

    pub fn is_false(self) -> Checked {
        self.boolean_assertion(false, "be_false")
    }

    fn boolean_assertion(self, expected: bool, message_key: &str) -> Checked {
        self.reporter.ensure_running()?;
        self.report_assertion_result(self.actual == expected, || {
            self.reporter.translated(message_key)
        })
    }
}

// Undefined values

impl<T: Debug> Assertion<'_, Option<T>> {
    pub fn is_undefined(self) -> Checked {
        self.reporter.ensure_running()?;
        self.report_assertion_result(self.actual.is_none(), || {
            self.reporter.translated("be_undefined")
        })
    }

    pub fn is_not_undefined(self) -> Checked {
        self.reporter.ensure_running()?;
        self.report_assertion_result(self.actual.is_some(), || {
            self.reporter.translated("be_defined")
        })
    }
}

// Numbers

impl<T> Assertion<'_, T>
where
    T: Into<f64> + Copy + Debug,
{
    pub fn is_near_to(self, number: f64) -> Checked {
        self.is_near_to_with_precision(number, DEFAULT_PRECISION_DIGITS)
    }

    /// Succeeds when the actual value, rounded to `precision_digits` decimal
    /// places, equals `number` exactly.
    pub fn is_near_to_with_precision(self, number: f64, precision_digits: usize) -> Checked {
        self.reporter.ensure_running()?;
        let actual: f64 = self.actual.into();
        let rounded = format!("{actual:.precision_digits$}").parse::<f64>();
        let near = rounded.is_ok_and(|rounded| rounded == number);
        self.report_assertion_result(near, || {
            format!(
                "{} {} ({} {} {})",
                self.reporter.translated("be_near_to"),
                number,
                self.reporter.translated("using"),
                precision_digits,
                self.reporter.translated("precision_digits")
            )
        })
    }
}

// Errors

impl<F, R> Assertion<'_, F>
where
    F: FnOnce() -> R,
    R: Raising,
{
    /// Succeeds when invoking the closure raises a value matching `expectation`.
    pub fn raises(self, expectation: ErrorExpectation<R::Error>) -> Checked
    where
        R::Error: PartialEq,
    {
        let description = expectation.describe();
        self.exception_assertion(description, |raised| expectation.matches(raised), true)
    }

    /// Succeeds when invoking the closure raises nothing, or something that
    /// does not match `expectation`.
    pub fn does_not_raise(self, expectation: ErrorExpectation<R::Error>) -> Checked
    where
        R::Error: PartialEq,
    {
        let description = expectation.describe();
        self.exception_assertion(description, |raised| expectation.matches(raised), false)
    }

    /// Like [`raises`](Self::raises) with a pattern, for error types
    /// without `PartialEq`.
    pub fn raises_matching(self, pattern: &Regex) -> Checked {
        self.exception_assertion(
            describe_pattern(pattern),
            |raised| pattern_matches(pattern, raised),
            true,
        )
    }

    pub fn does_not_raise_matching(self, pattern: &Regex) -> Checked {
        self.exception_assertion(
            describe_pattern(pattern),
            |raised| pattern_matches(pattern, raised),
            false,
        )
    }

    pub fn does_not_raise_any_errors(self) -> Checked {
        let Assertion { reporter, actual } = self;
        reporter.ensure_running()?;
        match invoke(actual) {
            None => reporter.report(TestResult::success()),
            Some(raised) => reporter.conclude(false, || {
                format!(
                    "{}, {} {:?} {}",
                    reporter.translated("expected_no_errors"),
                    reporter.translated("but"),
                    raised,
                    reporter.translated("was_raised")
                )
            }),
        }
    }

    fn exception_assertion(
        self,
        description: String,
        matches: impl FnOnce(&Raised<R::Error>) -> bool,
        should_raise: bool,
    ) -> Checked {
        let Assertion { reporter, actual } = self;
        reporter.ensure_running()?;
        let raised = invoke(actual);
        let succeeded = match &raised {
            None => !should_raise,
            Some(raised) => matches(raised) == should_raise,
        };
        reporter.conclude(succeeded, || {
            let happening = if should_raise { "to_happen" } else { "not_to_happen" };
            let introduction = format!(
                "{} {} {} {}",
                reporter.translated("expected"),
                reporter.translated("expecting_error"),
                description,
                reporter.translated(happening)
            );
            match &raised {
                Some(raised) => format!(
                    "{introduction}, {} {raised:?} {}",
                    reporter.translated("but_got"),
                    reporter.translated("instead")
                ),
                None => introduction,
            }
        })
    }
}

/// Join the non-empty words of a message with single spaces.
fn sentence(words: &[String]) -> String {
    words
        .iter()
        .map(String::as_str)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "assertion_tests.rs"]
mod tests;
