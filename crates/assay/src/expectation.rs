// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Raised values and the expectations they are matched against.

use std::convert::Infallible;
use std::fmt::{self, Debug, Display};
use std::panic::{self, AssertUnwindSafe};

use regex::Regex;

use crate::result::panic_message;

/// Output of a closure under an error check: `()` never raises,
/// `Result<T, E>` raises its `Err` value.
pub trait Raising {
    type Error: Debug + Display;

    fn into_raised(self) -> Option<Self::Error>;
}

impl Raising for () {
    type Error = Infallible;

    fn into_raised(self) -> Option<Infallible> {
        None
    }
}

impl<T, E: Debug + Display> Raising for Result<T, E> {
    type Error = E;

    fn into_raised(self) -> Option<E> {
        self.err()
    }
}

/// A value raised by an invoked closure.
pub enum Raised<E> {
    /// The closure returned an error.
    Error(E),
    /// The closure panicked; holds the panic message.
    Panic(String),
}

impl<E: Display> Display for Raised<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(error) => write!(f, "{error}"),
            Self::Panic(message) => write!(f, "{message}"),
        }
    }
}

impl<E: Debug> Debug for Raised<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(error) => write!(f, "{error:?}"),
            Self::Panic(message) => write!(f, "panic({message:?})"),
        }
    }
}

/// Invoke `f`, capturing a returned error or a panic.
pub fn invoke<F, R>(f: F) -> Option<Raised<R::Error>>
where
    F: FnOnce() -> R,
    R: Raising,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(output) => output.into_raised().map(Raised::Error),
        Err(payload) => Some(Raised::Panic(panic_message(payload.as_ref()))),
    }
}

/// What an error check looks for.
#[derive(Debug, Clone)]
pub enum ErrorExpectation<E> {
    /// The raised error must equal this value. A panic never matches.
    Exact(E),
    /// The pattern must match the raised value's string form.
    Pattern(Regex),
}

impl<E> ErrorExpectation<E> {
    pub fn exact(value: E) -> Self {
        Self::Exact(value)
    }

    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self::Pattern)
    }

    pub fn matches(&self, raised: &Raised<E>) -> bool
    where
        E: PartialEq + Display,
    {
        match (self, raised) {
            (Self::Pattern(pattern), raised) => pattern_matches(pattern, raised),
            (Self::Exact(expected), Raised::Error(error)) => expected == error,
            (Self::Exact(_), Raised::Panic(_)) => false,
        }
    }

    /// Rendering used in failure messages: the value, or `/pattern/`.
    pub fn describe(&self) -> String
    where
        E: Debug,
    {
        match self {
            Self::Exact(value) => format!("{value:?}"),
            Self::Pattern(pattern) => describe_pattern(pattern),
        }
    }
}

/// Whether `pattern` matches the string form of `raised`.
pub(crate) fn pattern_matches<E: Display>(pattern: &Regex, raised: &Raised<E>) -> bool {
    pattern.is_match(&raised.to_string())
}

pub(crate) fn describe_pattern(pattern: &Regex) -> String {
    format!("/{}/", pattern.as_str())
}

impl<E> From<Regex> for ErrorExpectation<E> {
    fn from(pattern: Regex) -> Self {
        Self::Pattern(pattern)
    }
}

#[cfg(test)]
#[path = "expectation_tests.rs"]
mod tests;
