//! Auth Token Model

use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};

/// Opaque bearer token bound to one account
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AuthToken {
    pub token: String,
    pub user_id: i64,
}

impl AuthToken {
    /// Generate a fresh 40-character hex token key from the system CSPRNG
    pub fn generate_key() -> Result<String, ring::error::Unspecified> {
        let rng = SystemRandom::new();
        let mut key = [0u8; 20];
        rng.fill(&mut key)?;
        Ok(hex::encode(key))
    }
}
