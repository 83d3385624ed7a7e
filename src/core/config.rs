//! Server configuration

/// Server configuration - all settings for the employee API
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_PATH | employee.db | SQLite database file |
/// | HTTP_PORT | 8000 | HTTP listen port |
/// | ENVIRONMENT | development | runtime environment |
/// | LOG_LEVEL | info | tracing filter level |
/// | LOG_DIR | (unset) | optional rolling file log directory |
/// | BOOTSTRAP_USERNAME | (unset) | seed account username |
/// | BOOTSTRAP_PASSWORD | (unset) | seed account password |
///
/// # Example
///
/// ```ignore
/// DATABASE_PATH=/data/employee.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file
    pub database_path: String,
    /// HTTP API listen port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// tracing filter level
    pub log_level: String,
    /// Optional directory for daily rolling log files
    pub log_dir: Option<String>,
    /// Seed account created at startup when the user table is empty
    pub bootstrap_username: Option<String>,
    pub bootstrap_password: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults
    pub fn from_env() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "employee.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            bootstrap_username: std::env::var("BOOTSTRAP_USERNAME").ok(),
            bootstrap_password: std::env::var("BOOTSTRAP_PASSWORD").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: "employee.db".into(),
            http_port: 8000,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            bootstrap_username: None,
            bootstrap_password: None,
        }
    }
}
