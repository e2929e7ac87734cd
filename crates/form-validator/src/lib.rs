//! Form Validator
//!
//! Collects per-field validation errors and provides the predicate helpers
//! forms are usually checked with.
//!
//! ```
//! use form_validator::{is_in, is_valid_email, validate_password, Validator};
//!
//! let mut v = Validator::new();
//! v.check(!"ada".is_empty(), "name", "must be provided");
//! v.check(is_valid_email("ada@example.com"), "email", "must be a valid email address");
//! v.check(is_in("admin", &["admin", "user"]), "role", "is not a known role");
//! v.check(validate_password("hunter2", 8), "password", "is too weak");
//!
//! assert!(!v.valid());
//! assert_eq!(v.get("password"), "is too weak");
//! assert_eq!(v.error(), "password=\"[is too weak]\"\n");
//! ```

pub mod collection;
pub mod email;
pub mod error;
pub mod errors;
pub mod password;
pub mod string;
pub mod validator;

pub use collection::*;
pub use email::*;
pub use error::{EmptyFieldMessages, ValidationErrors};
pub use errors::ErrorMap;
pub use password::*;
pub use string::*;
pub use validator::Validator;
