//! Opaque token authentication
//!
//! The credential is a DB-backed opaque key ([`crate::db::models::AuthToken`]),
//! presented as `Authorization: Token <value>`. This module holds the request
//! side: header parsing and the authenticated user context.

use crate::db::models::User;

/// Extract the token key from an Authorization header value
pub fn extract_from_header(header: &str) -> Option<&str> {
    header.strip_prefix("Token ")
}

/// Current user context (resolved from a presented token)
///
/// Created by the authentication middleware and injected into request
/// extensions for downstream permission checks.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub permissions: Vec<String>,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            permissions: user.permission_list(),
        }
    }
}

impl CurrentUser {
    /// Check whether the account holds the given permission
    ///
    /// Wildcard forms are supported:
    /// - `"all"` grants every permission
    /// - `"employee:*"` matches `"employee:write"`, `"employee:read"`, ...
    pub fn has_permission(&self, permission: &str) -> bool {
        if self.permissions.contains(&"all".to_string()) {
            return true;
        }

        // Exact match or wildcard match
        self.permissions.iter().any(|p| {
            if p == permission {
                return true;
            }
            if let Some(prefix) = p.strip_suffix(":*") {
                permission.starts_with(&format!("{prefix}:"))
            } else {
                false
            }
        })
    }
}
