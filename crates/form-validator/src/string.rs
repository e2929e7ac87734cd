//! String validation functions

use regex::Regex;

/// Membership test: true if `value` equals any entry of `list`
pub fn is_in<S: AsRef<str>>(value: &str, list: &[S]) -> bool {
    list.iter().any(|item| item.as_ref() == value)
}

/// Regex pattern matching
///
/// Takes a compiled pattern; keep patterns in a `Lazy<Regex>` static so they
/// are compiled once, the way [`EMAIL_RX`](crate::EMAIL_RX) is.
pub fn matches(value: &str, rx: &Regex) -> bool {
    rx.is_match(value)
}
