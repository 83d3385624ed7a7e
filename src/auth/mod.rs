//! Authentication and authorization module
//!
//! Opaque token authentication, permission checks and middleware:
//! - [`CurrentUser`] - current user context
//! - [`require_auth`] - authentication middleware
//! - [`require_permission`] - permission check middleware

pub mod middleware;
pub mod permissions;
pub mod token;

pub use middleware::{require_auth, require_permission};
pub use permissions::EMPLOYEE_WRITE;
pub use token::CurrentUser;
