// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Equality comparison with optional custom criteria.

use crate::i18n::Translate;

/// Result of comparing two values under custom criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub equal: bool,
    /// Replaces the generic failure message when present.
    pub diagnostic: Option<String>,
}

impl Comparison {
    pub fn equal() -> Self {
        Self {
            equal: true,
            diagnostic: None,
        }
    }

    pub fn different() -> Self {
        Self {
            equal: false,
            diagnostic: None,
        }
    }

    pub fn with_diagnostic(mut self, diagnostic: impl Into<String>) -> Self {
        self.diagnostic = Some(diagnostic.into());
        self
    }
}

impl From<bool> for Comparison {
    fn from(equal: bool) -> Self {
        if equal { Self::equal() } else { Self::different() }
    }
}

/// A custom way of deciding whether `actual` equals `expected`.
///
/// Any `Fn(&A, &E) -> bool` closure qualifies. Implement the trait directly
/// to attach a diagnostic to a failed comparison.
pub trait EqualityCriteria<A: ?Sized, E: ?Sized = A> {
    fn compare(&self, actual: &A, expected: &E) -> Comparison;
}

impl<A: ?Sized, E: ?Sized, F> EqualityCriteria<A, E> for F
where
    F: Fn(&A, &E) -> bool,
{
    fn compare(&self, actual: &A, expected: &E) -> Comparison {
        Comparison::from(self(actual, expected))
    }
}

/// Outcome of [`EqualityStrategy::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualityVerdict {
    pub comparison_result: bool,
    /// Appended to the generic "be equal to" message.
    pub additional_failure_message: String,
    /// Used verbatim instead of the generic message.
    pub override_failure_message: Option<String>,
}

pub struct EqualityStrategy;

impl EqualityStrategy {
    /// Compare structurally via `PartialEq`, or delegate to `criteria` when given.
    pub fn evaluate<A, E>(
        actual: &A,
        expected: &E,
        criteria: Option<&dyn EqualityCriteria<A, E>>,
        translator: &dyn Translate,
    ) -> EqualityVerdict
    where
        A: PartialEq<E> + ?Sized,
        E: ?Sized,
    {
        match criteria {
            Some(criteria) => Self::evaluate_custom(actual, expected, criteria, translator),
            None => EqualityVerdict {
                comparison_result: actual == expected,
                additional_failure_message: String::new(),
                override_failure_message: None,
            },
        }
    }

    /// Compare under `criteria` only; the values need not implement `PartialEq`.
    pub fn evaluate_custom<A, E>(
        actual: &A,
        expected: &E,
        criteria: &dyn EqualityCriteria<A, E>,
        translator: &dyn Translate,
    ) -> EqualityVerdict
    where
        A: ?Sized,
        E: ?Sized,
    {
        let Comparison { equal, diagnostic } = criteria.compare(actual, expected);
        EqualityVerdict {
            comparison_result: equal,
            additional_failure_message: format!(" {}", translator.translate("using_custom_criteria")),
            override_failure_message: diagnostic,
        }
    }
}

#[cfg(test)]
#[path = "equality_tests.rs"]
mod tests;
