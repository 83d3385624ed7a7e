//! Permission Definitions
//!
//! The API has one guarded concern: writes to the employee collection.
//! Reads are public. Accounts carry explicit permission lists; `"all"` is
//! the administrative catch-all.

/// Permission required by every mutating employee endpoint
pub const EMPLOYEE_WRITE: &str = "employee:write";

/// Configurable permissions
pub const ALL_PERMISSIONS: &[&str] = &[EMPLOYEE_WRITE];

/// Permissions granted to the bootstrap account
pub const DEFAULT_ADMIN_PERMISSIONS: &[&str] = &["all"];
