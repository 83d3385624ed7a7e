//! Employee API Server
//!
//! A REST API exposing CRUD operations on an employee registry, with opaque
//! bearer-token authentication and permission checks gating every write.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # configuration, state, server lifecycle
//! ├── auth/          # token authentication, permissions, middleware
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool, models, repositories
//! └── utils/         # errors, validation, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::CurrentUser;
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - supports tracing format specifiers
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Set up the process environment: `.env` file and logging
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}
