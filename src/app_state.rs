use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{RefreshTokenStore, UserDirectory};
use crate::services::{TokenExchangeService, TokenProvider};
use crate::utils::Config;

// Using type aliases to improve readability!
pub type UserDirectoryType = Arc<RwLock<dyn UserDirectory>>;
pub type RefreshTokenStoreType = Arc<RwLock<dyn RefreshTokenStore>>;
pub type TokenProviderType = Arc<TokenProvider>;
pub type TokenExchangeServiceType = Arc<TokenExchangeService>;

#[derive(Clone)]
pub struct AppState {
    pub user_directory: UserDirectoryType,
    pub refresh_token_store: RefreshTokenStoreType,
    pub token_provider: TokenProviderType,
    pub token_exchange: TokenExchangeServiceType,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        user_directory: UserDirectoryType,
        refresh_token_store: RefreshTokenStoreType,
    ) -> Self {
        let token_provider = TokenProvider::new(config.clone());
        let token_exchange = Arc::new(TokenExchangeService::new(
            refresh_token_store.clone(),
            user_directory.clone(),
            token_provider.clone(),
            config.access_token_ttl_seconds(),
        ));

        Self {
            user_directory,
            refresh_token_store,
            token_provider: Arc::new(token_provider),
            token_exchange,
            config,
        }
    }
}
