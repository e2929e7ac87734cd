//! Password validation functions

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// One alternation per accepted class, tried in order.
static CHAR_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\p{N})|(\p{Lu})|([\p{P}\p{S}])|([\p{L} ]))$")
        .expect("character class pattern is valid")
});

/// How a single password character counts towards strength
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Any Unicode number
    Number,
    /// Uppercase letter
    Upper,
    /// Punctuation or symbol
    Special,
    /// Other letters and the space character: allowed, but count for nothing
    Filler,
}

impl CharClass {
    /// Classifies `c`, or `None` if it is not allowed in a password.
    pub fn of(c: char) -> Option<Self> {
        let mut buf = [0u8; 4];
        let caps = CHAR_CLASS.captures(c.encode_utf8(&mut buf))?;

        if caps.get(1).is_some() {
            Some(Self::Number)
        } else if caps.get(2).is_some() {
            Some(Self::Upper)
        } else if caps.get(3).is_some() {
            Some(Self::Special)
        } else {
            Some(Self::Filler)
        }
    }
}

/// Validates password strength
///
/// Accepts `password` if it has at least `minimum_characters` characters,
/// a number, an uppercase letter and a punctuation or symbol character.
/// Other letters and spaces are allowed as filler; any other character
/// (control characters, tabs, combining marks) rejects the password.
pub fn validate_password(password: &str, minimum_characters: usize) -> bool {
    let mut count = 0;
    let mut number = false;
    let mut upper = false;
    let mut special = false;

    for (position, c) in password.chars().enumerate() {
        count += 1;
        match CharClass::of(c) {
            Some(CharClass::Number) => number = true,
            Some(CharClass::Upper) => upper = true,
            Some(CharClass::Special) => special = true,
            Some(CharClass::Filler) => {}
            None => {
                tracing::debug!(position, "password contains a disallowed character");
                return false;
            }
        }
    }

    number && upper && special && count >= minimum_characters
}

/// Password requirements, loadable from configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum number of characters (default: 8)
    pub minimum_characters: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            minimum_characters: 8,
        }
    }
}

impl PasswordPolicy {
    pub fn new(minimum_characters: usize) -> Self {
        Self { minimum_characters }
    }

    /// Parses a policy from TOML, e.g. `minimum_characters = 12`.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse password policy")
    }

    pub fn check(&self, password: &str) -> bool {
        validate_password(password, self.minimum_characters)
    }
}
