// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test outcomes and the evaluator that computes them.
//!
//! A [`TestResult`] is an immutable value naming one terminal outcome.
//! [`TestResult::evaluate`] runs a test body and dispatches the lifecycle
//! callback that matches the final outcome.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::assertion::Asserter;
use crate::fail_fast::FailFast;
use crate::i18n::Translate;
use crate::reporter::Reporter;
use crate::test::{BodyError, Test};

/// The outcome of a single test run.
#[derive(Debug, Clone, PartialEq)]
pub enum TestResult {
    Success,
    Failure { message: String },
    Error { cause: ErrorCause },
    /// The test was declared without a body.
    PendingImplicit,
    PendingExplicit { reason: String },
    Skipped { reason: String },
}

/// Tag identifying the kind of a [`TestResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    Success,
    Failure,
    Error,
    PendingImplicit,
    PendingExplicit,
    Skipped,
}

impl TestResult {
    pub fn success() -> Self {
        Self::Success
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn error(cause: ErrorCause) -> Self {
        Self::Error { cause }
    }

    pub fn explicitly_marked_as_pending(reason: impl Into<String>) -> Self {
        Self::PendingExplicit {
            reason: reason.into(),
        }
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    pub fn pending_no_body() -> Self {
        Self::PendingImplicit
    }

    pub fn kind(&self) -> ResultKind {
        match self {
            Self::Success => ResultKind::Success,
            Self::Failure { .. } => ResultKind::Failure,
            Self::Error { .. } => ResultKind::Error,
            Self::PendingImplicit => ResultKind::PendingImplicit,
            Self::PendingExplicit { .. } => ResultKind::PendingExplicit,
            Self::Skipped { .. } => ResultKind::Skipped,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// True for both implicit (no body) and explicit pending results.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::PendingImplicit | Self::PendingExplicit { .. })
    }

    pub fn is_explicitly_marked_pending(&self) -> bool {
        matches!(self, Self::PendingExplicit { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Human-readable detail: the failure message, error cause, or
    /// pending/skipped reason. `None` for success and implicit pending.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Failure { message } => Some(message.clone()),
            Self::Error { cause } => Some(cause.to_string()),
            Self::PendingExplicit { reason } | Self::Skipped { reason } => Some(reason.clone()),
            Self::Success | Self::PendingImplicit => None,
        }
    }

    /// Run `test` and finish it with the callback matching its final result.
    ///
    /// A test without a body finishes as pending without running anything.
    /// Errors returned by the body and panics escaping it become
    /// [`TestResult::Error`], subject to the sticky rule of
    /// [`Test::set_result`]. The fail-fast abort is swallowed; the failure
    /// that triggered it is already recorded.
    pub fn evaluate(test: &Test, fail_fast: &FailFast, translator: &dyn Translate) {
        let Some(body) = test.body() else {
            tracing::debug!(test = test.name(), "no body defined, marking as pending");
            test.mark_pending(Self::pending_no_body());
            return;
        };

        tracing::debug!(test = test.name(), fail_fast = fail_fast.is_enabled(), "running test");
        let reporter = Reporter::new(test, translator, fail_fast.is_enabled());
        let asserter = Asserter::new(&reporter);

        match panic::catch_unwind(AssertUnwindSafe(|| body(&asserter))) {
            Ok(Ok(())) => {}
            // Only this run's own abort is swallowed; any other `Abort` is an error.
            Ok(Err(error)) if error.is_abort() && reporter.is_aborted() => {
                tracing::debug!(test = test.name(), "body aborted after first failure");
            }
            Ok(Err(error)) => test.set_result(Self::error(ErrorCause::from(error))),
            Err(payload) => {
                let cause = ErrorCause::from_panic(payload);
                tracing::debug!(test = test.name(), %cause, "test body panicked");
                test.set_result(Self::error(cause));
            }
        }

        // A body that asserted nothing passes.
        if test.has_no_result() {
            test.set_result(Self::success());
        }
        if test.is_failure() || test.is_error() {
            fail_fast.register_failure();
        }

        Self::finish(test);
    }

    fn finish(test: &Test) {
        // Explicit pending > skipped > error > failure > success.
        if test.is_pending() {
            test.finish_with_pending_status();
        } else if test.is_skipped() {
            test.finish_with_skipped_status();
        } else if test.is_error() {
            test.finish_with_error();
        } else if test.is_failure() {
            test.finish_with_failure();
        } else {
            test.finish_with_success();
        }
    }
}

/// What ended a test body abnormally.
#[derive(Clone)]
pub enum ErrorCause {
    /// The body returned an error.
    Returned(Arc<dyn std::error::Error + Send + Sync>),
    /// The body panicked; holds the panic message.
    Panicked(String),
}

impl ErrorCause {
    pub fn returned<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Returned(Arc::new(error))
    }

    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        Self::Panicked(panic_message(payload.as_ref()))
    }

    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }
}

impl From<BodyError> for ErrorCause {
    fn from(error: BodyError) -> Self {
        Self::Returned(Arc::from(error.into_inner()))
    }
}

impl fmt::Display for ErrorCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Returned(error) => write!(f, "{error}"),
            Self::Panicked(message) => write!(f, "{message}"),
        }
    }
}

impl fmt::Debug for ErrorCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Returned(error) => f.debug_tuple("Returned").field(error).finish(),
            Self::Panicked(message) => f.debug_tuple("Panicked").field(message).finish(),
        }
    }
}

/// Causes compare by variant and rendered message.
impl PartialEq for ErrorCause {
    fn eq(&self, other: &Self) -> bool {
        self.is_panic() == other.is_panic() && self.to_string() == other.to_string()
    }
}

/// Extract the message of a panic payload (`&str` or `String`).
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
