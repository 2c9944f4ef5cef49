use chrono::Duration;
use thiserror::Error;

use crate::app_state::{RefreshTokenStoreType, UserDirectoryType};
use crate::services::token_provider::{GenerateTokenError, TokenProvider};

/// Exchanges a long-lived refresh token for a freshly minted access token:
/// resolve the refresh token to its owner, load the owner from the
/// directory, issue a new access token with the configured TTL.
///
/// The refresh token is only read. It is not rotated, deleted, or checked
/// for its own expiry; it behaves as a durable capability until something
/// outside this service invalidates it.
#[derive(Clone)]
pub struct TokenExchangeService {
    refresh_token_store: RefreshTokenStoreType,
    user_directory: UserDirectoryType,
    token_provider: TokenProvider,
    access_ttl: Duration,
}

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("unknown refresh token")]
    UnknownRefreshToken,

    #[error("refresh token owner no longer exists")]
    UnknownPrincipal,

    #[error("failed to issue a new access token")]
    Generate(#[from] GenerateTokenError),
}

impl TokenExchangeService {
    pub fn new(
        refresh_token_store: RefreshTokenStoreType,
        user_directory: UserDirectoryType,
        token_provider: TokenProvider,
        access_ttl_seconds: i64,
    ) -> Self {
        Self {
            refresh_token_store,
            user_directory,
            token_provider,
            access_ttl: Duration::seconds(access_ttl_seconds),
        }
    }

    /// Mints a new access token for the owner of `refresh_token`.
    ///
    /// An unknown refresh token fails before any directory access. No lock
    /// is held across the two lookups, so the owner may disappear between
    /// them; the lookup order makes that window surface as
    /// `UnknownPrincipal`.
    pub async fn exchange_for_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<String, ExchangeError> {
        let record = {
            let store = self.refresh_token_store.read().await;
            store
                .lookup(refresh_token)
                .await
                .map_err(|_| ExchangeError::UnknownRefreshToken)?
        };

        let user = {
            let directory = self.user_directory.read().await;
            directory
                .find_by_id(record.user_id)
                .await
                .map_err(|_| ExchangeError::UnknownPrincipal)?
        };

        Ok(self.token_provider.generate_token(&user, self.access_ttl)?)
    }
}
