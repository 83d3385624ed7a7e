//! Token Exchange Handler
//!
//! Trades a username/password pair for the account's opaque bearer token

use std::time::Duration;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::{token as token_repo, user as user_repo};
use crate::security_log;
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 100;

/// Credential payload; presence of both fields is checked by the handler
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Token exchange handler
///
/// Returns the account's token, minting one on first login. All failure
/// modes share a single 400 response so usernames cannot be enumerated.
pub async fn obtain_token(
    State(state): State<ServerState>,
    Json(req): Json<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let (Some(username), Some(password)) = (req.username, req.password) else {
        return Err(AppError::validation("username and password are required"));
    };

    let user = user_repo::find_by_username(state.pool(), &username)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    // Fixed delay before checking the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let user = match user {
        Some(user) => user,
        None => {
            security_log!("WARN", "login_failed", username = username.clone());
            tracing::warn!(username = %username, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    if !user.is_active {
        security_log!("WARN", "login_disabled_account", username = username.clone());
        return Err(AppError::invalid_credentials());
    }

    let password_valid = user
        .verify_password(&password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

    if !password_valid {
        security_log!("WARN", "login_failed", username = username.clone());
        tracing::warn!(username = %username, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    let token = token_repo::get_or_create(state.pool(), user.id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(TokenResponse { token }))
}
