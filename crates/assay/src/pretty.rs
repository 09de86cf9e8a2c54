// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of values inside failure messages.

use std::fmt::Debug;

/// Render `value` for a failure message using its `Debug` form.
///
/// Strings come out quoted, sequences bracketed and structs with field
/// names, so the actual value is unambiguous in a one-line message.
pub fn pretty_print<T: Debug + ?Sized>(value: &T) -> String {
    format!("{value:?}")
}
