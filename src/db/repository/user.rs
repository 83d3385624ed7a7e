//! User Account Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{User, UserCreate};

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash, permissions, is_active FROM user WHERE username = ? LIMIT 1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn create(pool: &SqlitePool, data: UserCreate) -> RepoResult<User> {
    // Check duplicate username
    if find_by_username(pool, &data.username).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Username '{}' already exists",
            data.username
        )));
    }

    let password_hash = User::hash_password(&data.password)
        .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?;
    let permissions_json =
        serde_json::to_string(&data.permissions).unwrap_or_else(|_| "[]".to_string());

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO user (username, password_hash, permissions) VALUES (?, ?, ?) RETURNING id, username, password_hash, permissions, is_active",
    )
    .bind(&data.username)
    .bind(&password_hash)
    .bind(&permissions_json)
    .fetch_one(pool)
    .await?;
    Ok(user)
}
