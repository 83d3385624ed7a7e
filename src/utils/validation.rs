//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! employee CRUD handlers. Lengths are counted in characters, not bytes;
//! SQLite TEXT has no built-in length enforcement.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Employee name fields: first_name, last_name, title
pub const MAX_NAME_LEN: usize = 30;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate a required field: present, non-empty, within the length limit.
pub fn require_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<String, AppError> {
    let value = value.ok_or_else(|| AppError::validation(format!("{field} is required")))?;
    check_text(value, field, max_len)?;
    Ok(value.to_string())
}

/// Validate an optional field: if present, non-empty and within the limit.
pub fn check_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        check_text(v, field, max_len)?;
    }
    Ok(())
}

fn check_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    let chars = value.chars().count();
    if chars > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({chars} chars, max {max_len})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_missing() {
        let err = require_text(None, "first_name", MAX_NAME_LEN).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_require_text_empty() {
        assert!(require_text(Some("   "), "first_name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_require_text_length_boundary() {
        let at_limit = "x".repeat(MAX_NAME_LEN);
        assert_eq!(
            require_text(Some(&at_limit), "first_name", MAX_NAME_LEN).unwrap(),
            at_limit
        );

        let over_limit = "x".repeat(MAX_NAME_LEN + 1);
        assert!(require_text(Some(&over_limit), "first_name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_check_optional_text() {
        assert!(check_optional_text(None, "title", MAX_NAME_LEN).is_ok());
        assert!(check_optional_text(Some("Manager"), "title", MAX_NAME_LEN).is_ok());
        assert!(check_optional_text(Some(""), "title", MAX_NAME_LEN).is_err());
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(check_optional_text(Some(&long), "title", MAX_NAME_LEN).is_err());
    }
}
