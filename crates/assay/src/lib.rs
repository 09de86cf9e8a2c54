// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A small unit-testing engine.
//!
//! Test bodies are closures that receive an [`Asserter`]. Every check
//! reports a [`TestResult`] into the owning [`Test`], whose result slot keeps
//! the first non-success outcome. After the body finishes, exactly one
//! lifecycle callback fires for the final result.
//!
//! ```ignore
//! let test = Test::new("adds", |assert| {
//!     assert.that(1 + 1).is_equal_to(2)?;
//!     assert.that(vec![1, 2, 3]).includes_exactly([3, 1, 2])?;
//!     Ok(())
//! }, callbacks);
//! test.run(&FailFast::disabled(), &I18n::default());
//! ```

pub mod assertion;
pub mod collection;
pub mod color;
pub mod config;
pub mod console;
pub mod equality;
pub mod error;
pub mod expectation;
pub mod fail_fast;
pub mod i18n;
pub mod pretty;
pub mod reporter;
pub mod result;
pub mod runner;
pub mod suite;

#[cfg(test)]
mod test_utils;

pub use assertion::{Asserter, Assertion};
pub use collection::{Contains, Length, have_same_elements};
pub use config::{ColorMode, Configuration};
pub use console::ConsoleUi;
pub use equality::{Comparison, EqualityCriteria, EqualityStrategy, EqualityVerdict};
pub use error::ConfigError;
pub use expectation::{ErrorExpectation, Raised, Raising};
pub use fail_fast::FailFast;
pub use i18n::{I18n, Language, Translate};
pub use pretty::pretty_print;
pub use reporter::{Abort, Checked, Reporter};
pub use result::{ErrorCause, ResultKind, TestResult};
pub use runner::{Runner, RunnerCallbacks};
pub use suite::{Suite, SuiteCallbacks, Summary};
pub use test::{Body, BodyError, BodyResult, SilentCallbacks, Test, TestCallbacks};
