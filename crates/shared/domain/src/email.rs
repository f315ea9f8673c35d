//! Email address value object.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_EMAIL_LENGTH, MIN_EMAIL_LENGTH};
use crate::error::{DomainError, DomainResult};

// Length is enforced separately; this only constrains the shape.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .unwrap_or_else(|e| panic!("email regex failed to compile: {}", e))
});

/// A syntactically valid email address.
///
/// The text is kept exactly as given: no trimming, no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an email address.
    ///
    /// # Errors
    /// Returns a validation error if the text is blank, shorter than 6 or
    /// longer than 320 characters, or not shaped like `local@domain.tld`.
    pub fn parse(text: impl Into<String>) -> DomainResult<Self> {
        let text = text.into();

        if text.trim().is_empty() {
            return Err(DomainError::validation("email must not be empty"));
        }

        let length = text.chars().count();
        if !(MIN_EMAIL_LENGTH..=MAX_EMAIL_LENGTH).contains(&length) {
            return Err(DomainError::validation(format!(
                "email must be between {} and {} characters",
                MIN_EMAIL_LENGTH, MAX_EMAIL_LENGTH
            )));
        }

        if !EMAIL_RE.is_match(&text) {
            return Err(DomainError::validation("email format is invalid"));
        }

        Ok(Self(text))
    }

    /// Same rules as [`Email::parse`], without the error detail.
    pub fn try_parse(text: impl Into<String>) -> Option<Self> {
        Self::parse(text).ok()
    }

    /// Get the address text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
