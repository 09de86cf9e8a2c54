// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Message translation.
//!
//! The engine only ever calls [`Translate::translate`]; [`I18n`] is the
//! bundled implementation with English and Spanish tables.

use serde::Deserialize;

/// Message-key lookup.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|language| language.code() == code)
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::English => ENGLISH,
            Self::Spanish => SPANISH,
        }
    }
}

/// Bundled translator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct I18n {
    language: Language,
}

impl I18n {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn default_language() -> Language {
        Language::default()
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl Translate for I18n {
    /// Falls back to English, then to the key itself (logged as a warning).
    fn translate(&self, key: &str) -> String {
        match lookup(self.language, key).or_else(|| lookup(Language::English, key)) {
            Some(text) => text.to_string(),
            None => {
                tracing::warn!(key, language = self.language.code(), "missing translation");
                key.to_string()
            }
        }
    }
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    language
        .table()
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
}

const ENGLISH: &[(&str, &str)] = &[
    // assertions
    ("expected", "expected"),
    ("to", "to"),
    ("be_true", "be true"),
    ("be_false", "be false"),
    ("be_undefined", "be undefined"),
    ("be_defined", "be defined"),
    ("be_equal_to", "be equal to"),
    ("be_not_equal_to", "be not equal to"),
    ("using_custom_criteria", "(using custom criteria)"),
    ("include", "include"),
    ("not_include", "not include"),
    ("include_exactly", "include exactly"),
    ("be_empty", "be empty"),
    ("be_not_empty", "be not empty"),
    ("be_near_to", "be near to"),
    ("using", "using"),
    ("precision_digits", "precision digits"),
    ("expected_no_errors", "expected no errors"),
    ("but", "but"),
    ("was_raised", "was raised"),
    ("expecting_error", "expecting error"),
    ("to_happen", "to happen"),
    ("not_to_happen", "not to happen"),
    ("but_got", "but got"),
    ("instead", "instead"),
    ("explicitly_failed", "Explicitly failed"),
    ("skipped_due_to_fail_fast", "Skipped due to fail fast mode"),
    // console
    ("running_tests", "Running tests"),
    ("fail_fast", "Fail fast"),
    ("language", "Language"),
    ("enabled", "enabled"),
    ("disabled", "disabled"),
    ("summary_of", "Summary of"),
    ("total", "Total"),
    ("passed", "passed"),
    ("failed", "failed"),
    ("errors", "errors"),
    ("pending", "pending"),
    ("skipped", "skipped"),
    ("error", "Error"),
];

const SPANISH: &[(&str, &str)] = &[
    // assertions
    ("expected", "se esperaba que"),
    ("to", ""),
    ("be_true", "sea verdadero"),
    ("be_false", "sea falso"),
    ("be_undefined", "sea indefinido"),
    ("be_defined", "esté definido"),
    ("be_equal_to", "sea igual a"),
    ("be_not_equal_to", "no sea igual a"),
    ("using_custom_criteria", "(usando criterio personalizado)"),
    ("include", "incluya a"),
    ("not_include", "no incluya a"),
    ("include_exactly", "incluya exactamente a"),
    ("be_empty", "sea vacío"),
    ("be_not_empty", "no sea vacío"),
    ("be_near_to", "esté cerca de"),
    ("using", "usando"),
    ("precision_digits", "dígitos de precisión"),
    ("expected_no_errors", "no se esperaban errores"),
    ("but", "pero"),
    ("was_raised", "fue lanzado"),
    ("expecting_error", "el error"),
    ("to_happen", "ocurriera"),
    ("not_to_happen", "no ocurriera"),
    ("but_got", "pero se obtuvo"),
    ("instead", "en su lugar"),
    ("explicitly_failed", "Marcado como fallido explícitamente"),
    ("skipped_due_to_fail_fast", "Omitido por el modo fail fast"),
    // console
    ("running_tests", "Ejecutando tests"),
    ("fail_fast", "Fail fast"),
    ("language", "Idioma"),
    ("enabled", "activado"),
    ("disabled", "desactivado"),
    ("summary_of", "Resumen de"),
    ("total", "Total"),
    ("passed", "exitosos"),
    ("failed", "fallidos"),
    ("errors", "errores"),
    ("pending", "pendientes"),
    ("skipped", "omitidos"),
    ("error", "Error"),
];

#[cfg(test)]
#[path = "i18n_tests.rs"]
mod tests;
