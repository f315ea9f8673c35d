//! Field guards shared by the simple entities.

use crate::error::{DomainError, DomainResult};

/// Require a non-blank value.
pub(crate) fn required_text(value: impl Into<String>, field: &str) -> DomainResult<String> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{} must not be empty", field)));
    }
    Ok(value)
}

/// Optional value that must be non-blank when present.
pub(crate) fn optional_text(value: Option<String>, field: &str) -> DomainResult<Option<String>> {
    value.map(|v| required_text(v, field)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert_eq!(required_text("Ana", "first name").unwrap(), "Ana");
        assert_eq!(
            required_text(" \t", "first name").unwrap_err(),
            DomainError::validation("first name must not be empty")
        );
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(None, "phone").unwrap(), None);
        assert!(optional_text(Some(String::new()), "phone").is_err());
        assert_eq!(
            optional_text(Some("555-0100".into()), "phone").unwrap(),
            Some("555-0100".to_string())
        );
    }
}
