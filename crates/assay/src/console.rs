// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console presentation of test, suite and run events.
//!
//! [`ConsoleUi`] implements every callback trait and writes one line per
//! finished test. It never exits the process: the exit code it would use
//! is recorded and exposed through [`ConsoleUi::exit_code`].

use std::cell::{Cell, RefCell};
use std::io;

use termcolor::{ColorSpec, StandardStream, WriteColor};

use crate::color::{color_choice, scheme};
use crate::config::Configuration;
use crate::i18n::{I18n, Language, Translate};
use crate::runner::RunnerCallbacks;
use crate::suite::{Suite, SuiteCallbacks, Summary};
use crate::test::{Test, TestCallbacks};

pub const SUCCESSFUL_EXIT_CODE: i32 = 0;
pub const FAILED_EXIT_CODE: i32 = 1;

pub struct ConsoleUi<W: WriteColor> {
    out: RefCell<W>,
    i18n: Cell<I18n>,
    exit_code: Cell<Option<i32>>,
}

impl ConsoleUi<StandardStream> {
    /// Console writing to stdout, colored according to `configuration`.
    pub fn stdout(configuration: &Configuration) -> Self {
        let choice = color_choice(configuration.color);
        Self::new(StandardStream::stdout(choice), configuration.language)
    }
}

impl<W: WriteColor> ConsoleUi<W> {
    pub fn new(out: W, language: Language) -> Self {
        Self {
            out: RefCell::new(out),
            i18n: Cell::new(I18n::new(language)),
            exit_code: Cell::new(None),
        }
    }

    pub fn use_language(&self, language: Language) {
        self.i18n.set(I18n::new(language));
    }

    /// The exit code requested by the last run or error, if any.
    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code.get()
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    pub fn display_initial_information(&self, configuration: &Configuration) {
        let i18n = self.i18n.get();
        let fail_fast = if configuration.fail_fast { "enabled" } else { "disabled" };
        let lines = [
            i18n.translate("running_tests"),
            format!("{}: {}", i18n.translate("fail_fast"), i18n.translate(fail_fast)),
            format!("{}: {}", i18n.translate("language"), configuration.language.code()),
        ];
        self.write_or_warn(|out| {
            for line in &lines {
                writeln!(out, "{line}")?;
            }
            writeln!(out)
        });
    }

    /// Print each message as an error and request the failure exit code.
    pub fn exit_with_error<I, S>(&self, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let label = self.i18n.get().translate("error");
        for message in messages {
            let message = message.as_ref();
            self.write_or_warn(|out| {
                write_colored(out, &scheme::error(), &label)?;
                writeln!(out, ": {message}")
            });
        }
        self.exit_with_code(FAILED_EXIT_CODE);
    }

    fn exit_with_code(&self, code: i32) {
        tracing::debug!(code, "exit code requested");
        self.exit_code.set(Some(code));
    }

    fn display_result(&self, label: &str, spec: ColorSpec, test: &Test) {
        let detail = test.result().and_then(|result| result.detail());
        self.write_or_warn(|out| {
            write_colored(out, &spec, &format!("[{label}]"))?;
            write!(out, " {}", test.name())?;
            if let Some(detail) = &detail {
                write!(out, " => ")?;
                write_colored(out, &scheme::detail(), detail)?;
            }
            writeln!(out)
        });
    }

    fn summary_line(&self, summary: &Summary) -> String {
        let i18n = self.i18n.get();
        format!(
            "{} {}, {} {}, {} {}, {} {}, {} {}, {} {}",
            summary.total(),
            i18n.translate("total"),
            summary.success,
            i18n.translate("passed"),
            summary.failure,
            i18n.translate("failed"),
            summary.error,
            i18n.translate("errors"),
            summary.pending,
            i18n.translate("pending"),
            summary.skipped,
            i18n.translate("skipped"),
        )
    }

    /// Callbacks cannot return errors; a failed write is logged and dropped.
    fn write_or_warn(&self, write: impl FnOnce(&mut W) -> io::Result<()>) {
        let mut out = self.out.borrow_mut();
        if let Err(err) = write(&mut *out).and_then(|()| out.flush()) {
            tracing::warn!("failed to write console output: {}", err);
        }
    }
}

fn write_colored<W: WriteColor>(out: &mut W, spec: &ColorSpec, text: &str) -> io::Result<()> {
    out.set_color(spec)?;
    write!(out, "{text}")?;
    out.reset()
}

impl<W: WriteColor> TestCallbacks for ConsoleUi<W> {
    fn on_pending(&self, test: &Test) {
        self.display_result("WIP", scheme::pending(), test);
    }

    fn on_skipped(&self, test: &Test) {
        self.display_result("SKIP", scheme::skipped(), test);
    }

    fn on_success(&self, test: &Test) {
        self.display_result("PASS", scheme::pass(), test);
    }

    fn on_failure(&self, test: &Test) {
        self.display_result("FAIL", scheme::fail(), test);
    }

    fn on_error(&self, test: &Test) {
        self.display_result("ERROR", scheme::error(), test);
    }
}

impl<W: WriteColor> SuiteCallbacks for ConsoleUi<W> {
    fn on_start(&self, suite: &Suite) {
        self.write_or_warn(|out| {
            write_colored(out, &scheme::suite_name(), suite.name())?;
            writeln!(out, ":")
        });
    }

    fn on_finish(&self, suite: &Suite, summary: &Summary) {
        let heading = format!("{} {}:", self.i18n.get().translate("summary_of"), suite.name());
        let line = self.summary_line(summary);
        self.write_or_warn(|out| writeln!(out, "{heading}\n  {line}\n"));
    }
}

impl<W: WriteColor> RunnerCallbacks for ConsoleUi<W> {
    fn on_finish(&self, summary: &Summary) {
        let line = self.summary_line(summary);
        let spec = if summary.is_success() { scheme::pass() } else { scheme::fail() };
        self.write_or_warn(|out| {
            write_colored(out, &spec, &line)?;
            writeln!(out)
        });
    }

    fn on_success(&self, _summary: &Summary) {
        self.exit_with_code(SUCCESSFUL_EXIT_CODE);
    }

    fn on_failure(&self, _summary: &Summary) {
        self.exit_with_code(FAILED_EXIT_CODE);
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
