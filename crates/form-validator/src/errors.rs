//! Per-field error messages

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EmptyFieldMessages;

/// Field names to the messages recorded for them, in insertion order per field.
///
/// Fields are kept sorted by name so rendering is stable across calls.
/// Every field present has at least one message; deserializing a field with
/// an empty list fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Vec<String>>",
    into = "BTreeMap<String, Vec<String>>"
)]
pub struct ErrorMap(BTreeMap<String, Vec<String>>);

impl ErrorMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message for `field`, creating its entry if needed.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Returns the first message for `field`, or `""` when there is none.
    pub fn get(&self, field: &str) -> &str {
        self.0
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// All messages for `field`, oldest first.
    pub fn get_all(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True if `field` has at least one message
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of fields with at least one message
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no field has a message
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fields and their messages, sorted by field name.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.0.iter()
    }

    /// Collapses every field to its first message.
    pub fn first_errors(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .filter_map(|(field, messages)| {
                messages.first().map(|first| (field.clone(), first.clone()))
            })
            .collect()
    }
}

/// Renders one `field="[first second]"` line per field.
impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, messages) in &self.0 {
            writeln!(f, "{}=\"[{}]\"", field, messages.join(" "))?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<BTreeMap<String, Vec<String>>> for ErrorMap {
    type Error = EmptyFieldMessages;

    fn try_from(map: BTreeMap<String, Vec<String>>) -> Result<Self, Self::Error> {
        match map.iter().find(|(_, messages)| messages.is_empty()) {
            Some((field, _)) => Err(EmptyFieldMessages(field.clone())),
            None => Ok(Self(map)),
        }
    }
}

impl From<ErrorMap> for BTreeMap<String, Vec<String>> {
    fn from(map: ErrorMap) -> Self {
        map.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_appends() {
        let mut errors = ErrorMap::new();
        errors.add("email", "is required");
        errors.add("email", "must be a valid email address");

        assert_eq!(
            errors.get_all("email"),
            ["is required", "must be a valid email address"]
        );
        assert_eq!(errors.get("email"), "is required");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_add_does_not_dedupe() {
        let mut errors = ErrorMap::new();
        errors.add("name", "is required");
        errors.add("name", "is required");

        assert_eq!(errors.get_all("name").len(), 2);
    }

    #[test]
    fn test_get_missing_field() {
        let errors = ErrorMap::new();
        assert_eq!(errors.get("missing"), "");
        assert!(errors.get_all("missing").is_empty());
        assert!(!errors.contains("missing"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_display_sorted_by_field() {
        let mut errors = ErrorMap::new();
        errors.add("username", "is taken");
        errors.add("age", "must be at least 18");
        errors.add("age", "must be a number");

        assert_eq!(
            errors.to_string(),
            "age=\"[must be at least 18 must be a number]\"\nusername=\"[is taken]\"\n"
        );
    }

    #[test]
    fn test_deserialize_rejects_empty_message_list() {
        let err = serde_json::from_str::<ErrorMap>(r#"{"email": ["is required"], "name": []}"#)
            .unwrap_err();
        assert!(err.to_string().contains("`name` has no messages"));
    }

    #[test]
    fn test_deserialize_keeps_messages() {
        let errors: ErrorMap =
            serde_json::from_str(r#"{"name": ["is required", "is too short"]}"#).unwrap();

        assert_eq!(errors.get("name"), "is required");
        assert_eq!(errors.get_all("name"), ["is required", "is too short"]);
        assert_eq!(
            serde_json::to_string(&errors).unwrap(),
            r#"{"name":["is required","is too short"]}"#
        );
    }

    #[test]
    fn test_first_errors() {
        let mut errors = ErrorMap::new();
        errors.add("password", "is too short");
        errors.add("password", "needs a digit");
        errors.add("email", "is required");

        let first = errors.first_errors();
        assert_eq!(first.get("password").map(String::as_str), Some("is too short"));
        assert_eq!(first.get("email").map(String::as_str), Some("is required"));
    }
}
