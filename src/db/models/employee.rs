//! Employee Model

use serde::{Deserialize, Serialize};

use crate::utils::AppError;
use crate::utils::validation::{MAX_NAME_LEN, check_optional_text, require_text};

/// Employee row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
}

/// Incoming employee payload for POST/PUT/PATCH
///
/// All fields optional; each operation enforces its own presence rules
/// through the `validate_*` methods.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeePayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
}

/// Fully validated employee fields
#[derive(Debug, Clone)]
pub struct EmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
}

impl EmployeePayload {
    /// Validate a create payload: every field present, non-empty, within limits.
    pub fn validate_create(self) -> Result<EmployeeInput, AppError> {
        Ok(EmployeeInput {
            first_name: require_text(self.first_name.as_deref(), "first_name", MAX_NAME_LEN)?,
            last_name: require_text(self.last_name.as_deref(), "last_name", MAX_NAME_LEN)?,
            title: require_text(self.title.as_deref(), "title", MAX_NAME_LEN)?,
        })
    }

    /// Validate a full-update payload. A missing field means the client sent
    /// a partial record, which PUT does not accept.
    pub fn validate_replace(self) -> Result<EmployeeInput, AppError> {
        if self.first_name.is_none() || self.last_name.is_none() || self.title.is_none() {
            return Err(AppError::validation("Partial update will be rejected"));
        }
        self.validate_create()
    }

    /// Validate a partial-update payload: only supplied fields are checked.
    pub fn validate_partial(&self) -> Result<(), AppError> {
        check_optional_text(self.first_name.as_deref(), "first_name", MAX_NAME_LEN)?;
        check_optional_text(self.last_name.as_deref(), "last_name", MAX_NAME_LEN)?;
        check_optional_text(self.title.as_deref(), "title", MAX_NAME_LEN)?;
        Ok(())
    }

    /// True when no field was supplied (PATCH no-op)
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.title.is_none()
    }
}

/// Employee API representation with a canonical self-link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub url: String,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
}
