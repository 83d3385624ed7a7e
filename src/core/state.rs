//! Server state

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::permissions::DEFAULT_ADMIN_PERMISSIONS;
use crate::core::Config;
use crate::db::DbService;
use crate::db::models::UserCreate;
use crate::db::repository::user as user_repo;
use crate::utils::AppError;

/// Server state - shared handle injected into every handler
///
/// Cheap to clone: configuration behind an [`Arc`], database behind a pool.
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    db: DbService,
}

impl ServerState {
    /// Open the database, apply migrations and seed the bootstrap account
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        let state = Self {
            config: Arc::new(config.clone()),
            db,
        };
        state.bootstrap_account().await?;
        Ok(state)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    /// Create the seed account when the user table is empty
    ///
    /// Replaces out-of-band fixture loading: with BOOTSTRAP_USERNAME and
    /// BOOTSTRAP_PASSWORD set, the first startup yields one account holding
    /// every permission, from which further accounts can be provisioned.
    async fn bootstrap_account(&self) -> Result<(), AppError> {
        let (Some(username), Some(password)) = (
            self.config.bootstrap_username.as_ref(),
            self.config.bootstrap_password.as_ref(),
        ) else {
            return Ok(());
        };

        let existing = user_repo::count(self.pool())
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        if existing > 0 {
            return Ok(());
        }

        let user = user_repo::create(
            self.pool(),
            UserCreate {
                username: username.clone(),
                password: password.clone(),
                permissions: DEFAULT_ADMIN_PERMISSIONS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
        )
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

        tracing::info!(username = %user.username, "Bootstrap account created");
        Ok(())
    }
}
