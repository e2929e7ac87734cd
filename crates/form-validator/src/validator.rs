//! Validator: first-error-wins collection of field errors

use std::fmt;

use crate::error::ValidationErrors;
use crate::errors::ErrorMap;

/// Accumulates validation errors while a form is being checked.
///
/// Only the first error reported for a field is kept, so later checks can't
/// overwrite the message the user sees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validator {
    errors: ErrorMap,
}

impl Validator {
    /// Creates a validator with no errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no errors have been recorded
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records `message` for `key` unless `key` already has an error.
    pub fn add_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        let key = key.into();
        if self.errors.contains(&key) {
            tracing::debug!(field = %key, "field already failed, dropping later error");
            return;
        }

        let message = message.into();
        tracing::debug!(field = %key, message = %message, "validation failed");
        self.errors.add(key, message);
    }

    /// Records `message` for `key` when `ok` is false.
    ///
    /// A passing check never clears an earlier error.
    pub fn check(&mut self, ok: bool, key: impl Into<String>, message: impl Into<String>) {
        if !ok {
            self.add_error(key, message);
        }
    }

    /// First error for `key`, or `""`.
    pub fn get(&self, key: &str) -> &str {
        self.errors.get(key)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Renders every field as `key="[messages]"` followed by a newline, in field order.
    pub fn error(&self) -> String {
        self.errors.to_string()
    }

    /// Ends validation: `Ok(())` when valid, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.valid() {
            return Ok(());
        }

        tracing::trace!(fields = self.errors.len(), "validation finished with errors");
        Err(ValidationErrors::new(self.errors))
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.errors, f)
    }
}

impl std::error::Error for Validator {}
