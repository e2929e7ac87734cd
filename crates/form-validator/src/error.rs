use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::errors::ErrorMap;

/// A deserialized error map listed a field with no messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field `{0}` has no messages")]
pub struct EmptyFieldMessages(pub String);

/// The errors a failed [`Validator`](crate::Validator) collected.
///
/// Displays exactly like [`Validator::error`](crate::Validator::error).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{0}")]
#[serde(transparent)]
pub struct ValidationErrors(ErrorMap);

impl ValidationErrors {
    pub(crate) fn new(errors: ErrorMap) -> Self {
        Self(errors)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.0
    }

    pub fn into_map(self) -> ErrorMap {
        self.0
    }

    /// Field name to the first message recorded for it
    pub fn first_errors(&self) -> BTreeMap<String, String> {
        self.0.first_errors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_matches_render() {
        let mut map = ErrorMap::new();
        map.add("name", "required");
        let errors = ValidationErrors::new(map);

        assert_eq!(errors.to_string(), "name=\"[required]\"\n");
    }

    #[test]
    fn test_serializes_as_field_object() {
        let mut map = ErrorMap::new();
        map.add("email", "is required");
        map.add("email", "must be a valid email address");
        let errors = ValidationErrors::new(map);

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "email": ["is required", "must be a valid email address"] })
        );
    }
}
