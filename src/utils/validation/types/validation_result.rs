//! Result objects handed back to the form screens.
//!
//! A result can only be produced from a finished [`FieldErrors`] map, so its
//! validity flag always agrees with the presence of field errors.

use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

/// Field name to error message. An absent key means the field passed.
pub type ErrorMap = BTreeMap<String, String>;

/// Collects field errors while a form is being checked
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: ErrorMap,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for `field`, replacing any earlier one
    pub fn add(&mut self, field: &str, message: &str) {
        self.errors.insert(field.to_string(), message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Closes the map into a result, logging how many fields were rejected
    pub fn finish(self, form: &str) -> ValidationResult {
        if !self.errors.is_empty() {
            debug!("{} form rejected: {} field error(s)", form, self.errors.len());
        }
        ValidationResult::from(self)
    }

    pub(crate) fn into_map(self) -> ErrorMap {
        self.errors
    }
}

/// Outcome of validating a single form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: ErrorMap,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Returns the message recorded for `field`, if any
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

impl From<FieldErrors> for ValidationResult {
    fn from(errors: FieldErrors) -> Self {
        let errors = errors.into_map();
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Outcome of validating a list of proposal milestones.
///
/// `errors` has exactly one entry per input milestone, in input order; an
/// empty map means that milestone passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestonesValidation {
    is_valid: bool,
    errors: Vec<ErrorMap>,
}

impl MilestonesValidation {
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &[ErrorMap] {
        &self.errors
    }
}

impl FromIterator<FieldErrors> for MilestonesValidation {
    fn from_iter<I: IntoIterator<Item = FieldErrors>>(iter: I) -> Self {
        let errors: Vec<ErrorMap> = iter.into_iter().map(FieldErrors::into_map).collect();
        Self {
            is_valid: errors.iter().all(|e| e.is_empty()),
            errors,
        }
    }
}
