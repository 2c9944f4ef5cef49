use std::sync::Arc;

use tokio::sync::RwLock;

use token_auth_service::app_state::{AppState, RefreshTokenStoreType, UserDirectoryType};
use token_auth_service::services::{HashmapRefreshTokenStore, HashmapUserDirectory};
use token_auth_service::utils::Config;
use token_auth_service::Application;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Arc::new(Config::from_env().expect("Failed to load config"));
    let user_directory: UserDirectoryType =
        Arc::new(RwLock::new(HashmapUserDirectory::default()));
    let refresh_token_store: RefreshTokenStoreType =
        Arc::new(RwLock::new(HashmapRefreshTokenStore::default()));

    let app_state = AppState::new(config, user_directory, refresh_token_store);

    let app = Application::build(app_state, "0.0.0.0:3000")
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
