//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::string::matches;

/// Practical email address shape: an allowed-character local part, `@`, then
/// dot-separated DNS labels of 1-63 alphanumerics with hyphens only inside.
pub static EMAIL_RX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+\\/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// Validates email format against [`EMAIL_RX`]
pub fn is_valid_email(email: &str) -> bool {
    matches(email, &EMAIL_RX)
}
