//! Authentication middleware
//!
//! Axum middleware for token authentication and authorization

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, token};
use crate::core::ServerState;
use crate::db::repository::token as token_repo;
use crate::security_log;
use crate::utils::AppError;

/// Authentication middleware - requires a valid token on mutating requests
///
/// Parses `Authorization: Token <value>`, resolves the key against the
/// auth_token table and injects the owning [`CurrentUser`] into request
/// extensions (`req.extensions_mut().insert(user)`).
///
/// # Paths that skip authentication
///
/// - `OPTIONS *` (CORS preflight)
/// - read requests (GET/HEAD — list and detail are public)
/// - anything outside `/api/v1/` (health, the token exchange itself)
///
/// # Error handling
///
/// | Error | HTTP status |
/// |-------|-------------|
/// | no Authorization header | 401 Unauthorized |
/// | malformed header | 401 InvalidToken |
/// | unknown token / disabled account | 401 InvalidToken |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Allow OPTIONS requests for CORS preflight (skip authentication)
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Reads are public
    if !is_mutating(req.method()) {
        return Ok(next.run(req).await);
    }

    // Non-versioned paths skip authentication (health, token exchange)
    if !req.uri().path().starts_with("/api/v1/") {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let key = match auth_header {
        Some(header) => token::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?
            .to_string(),
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::unauthorized());
        }
    };

    let user = token_repo::find_user(state.pool(), &key)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    match user {
        Some(user) if user.is_active => {
            req.extensions_mut().insert(CurrentUser::from(&user));
            Ok(next.run(req).await)
        }
        _ => {
            security_log!("WARN", "auth_failed", uri = format!("{:?}", req.uri()));
            Err(AppError::invalid_token("Invalid token"))
        }
    }
}

fn is_mutating(method: &http::Method) -> bool {
    matches!(
        *method,
        http::Method::POST | http::Method::PUT | http::Method::PATCH | http::Method::DELETE
    )
}

/// Permission check middleware - requires a specific permission
///
/// # Arguments
///
/// - `permission`: the required permission, e.g. `"employee:write"`
///
/// # Usage
///
/// ```ignore
/// use axum::middleware;
/// Router::new()
///     .route("/api/v1/employee/", post(handler::create))
///     .layer(middleware::from_fn(require_permission("employee:write")));
/// ```
///
/// # Errors
///
/// Missing permission returns 403 Forbidden
pub fn require_permission(
    permission: &'static str,
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let user = req
                .extensions()
                .get::<CurrentUser>()
                .ok_or(AppError::unauthorized())?;

            if !user.has_permission(permission) {
                security_log!(
                    "WARN",
                    "permission_denied",
                    user_id = user.id,
                    username = user.username.clone(),
                    required_permission = permission
                );
                return Err(AppError::forbidden(format!(
                    "Permission denied: {permission}"
                )));
            }

            Ok(next.run(req).await)
        })
    }
}
