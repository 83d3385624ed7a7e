//! Token Exchange API Module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub use handler::{TokenRequest, TokenResponse};

/// Token exchange router - public route
pub fn router() -> Router<ServerState> {
    Router::new().route("/api-token-auth/", post(handler::obtain_token))
}
