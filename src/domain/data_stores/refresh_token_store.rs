use base64::{engine::general_purpose::STANDARD as B64, Engine};
use rand::RngCore;

use super::{RefreshTokenRecord, RefreshTokenStoreError};

#[async_trait::async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// Stores a new record. The token string is the unique key; inserting a
    /// duplicate fails with `TokenAlreadyExists`.
    async fn insert(&mut self, record: RefreshTokenRecord)
        -> Result<(), RefreshTokenStoreError>;

    /// Resolves a presented refresh token back to its record.
    async fn lookup(&self, token: &str) -> Result<RefreshTokenRecord, RefreshTokenStoreError>;
}

/// Mints a fresh opaque refresh token: 32 random bytes, base64 encoded.
pub fn mint_refresh_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    B64.encode(bytes)
}
