//! Auth Token Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::User;
use crate::db::models::token::AuthToken;

/// Resolve a presented token key to its owning account
pub async fn find_user(pool: &SqlitePool, key: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT u.id, u.username, u.password_hash, u.permissions, u.is_active \
         FROM user u INNER JOIN auth_token t ON t.user_id = u.id \
         WHERE t.token = ?",
    )
    .bind(key)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

/// Return the account's token, minting one on first login.
///
/// Tokens are stable: repeated logins hand back the same key.
pub async fn get_or_create(pool: &SqlitePool, user_id: i64) -> RepoResult<String> {
    let mut tx = pool.begin().await?;

    let existing: Option<String> =
        sqlx::query_scalar("SELECT token FROM auth_token WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;
    if let Some(token) = existing {
        tx.commit().await?;
        return Ok(token);
    }

    let key = AuthToken::generate_key()
        .map_err(|_| RepoError::Database("Failed to generate token key".to_string()))?;
    sqlx::query("INSERT INTO auth_token (token, user_id) VALUES (?, ?)")
        .bind(&key)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(key)
}
