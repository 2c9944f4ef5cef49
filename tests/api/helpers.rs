use std::sync::Arc;

use reqwest::Client;
use tokio::net::TcpListener;
use tokio::spawn;
use tokio::sync::RwLock;
use uuid::Uuid;

use token_auth_service::app_router;
use token_auth_service::app_state::{AppState, RefreshTokenStoreType, UserDirectoryType};
use token_auth_service::domain::{mint_refresh_token, Email, RefreshTokenRecord, User};
use token_auth_service::services::{HashmapRefreshTokenStore, HashmapUserDirectory};
use token_auth_service::utils::Config;

pub const TEST_ISSUER: &str = "test-issuer";
pub const TEST_SECRET: &str = "test-secret-at-least-32-bytes-long!!";

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub user_directory: UserDirectoryType,
    pub refresh_token_store: RefreshTokenStoreType,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = Arc::new(
            Config::new(TEST_ISSUER.to_owned(), TEST_SECRET.to_owned(), 60)
                .expect("failed to build test config"),
        );
        let user_directory: UserDirectoryType =
            Arc::new(RwLock::new(HashmapUserDirectory::default()));
        let refresh_token_store: RefreshTokenStoreType =
            Arc::new(RwLock::new(HashmapRefreshTokenStore::default()));

        let app_state = AppState::new(
            config,
            user_directory.clone(),
            refresh_token_store.clone(),
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed binding to an ephemeral port");

        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = axum::serve(listener, app_router(app_state));

        spawn(async move {
            if let Err(e) = server.await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
            user_directory,
            refresh_token_store,
        }
    }

    /// Seeds a user and a refresh token owned by it, the way primary
    /// authentication would. Returns the refresh token string.
    pub async fn seed_session(&self, user_id: i64, email: &str) -> String {
        let email = Email::parse(email.to_owned()).expect("valid test email");
        self.user_directory
            .write()
            .await
            .add_user(User::new(user_id, email))
            .await
            .expect("user seeded");

        let token = mint_refresh_token();
        self.refresh_token_store
            .write()
            .await
            .insert(RefreshTokenRecord {
                token: token.clone(),
                user_id,
            })
            .await
            .expect("refresh token seeded");

        token
    }

    /// Seeds a refresh token whose owner is absent from the directory.
    pub async fn seed_orphan_refresh_token(&self, user_id: i64) -> String {
        let token = mint_refresh_token();
        self.refresh_token_store
            .write()
            .await
            .insert(RefreshTokenRecord {
                token: token.clone(),
                user_id,
            })
            .await
            .expect("refresh token seeded");

        token
    }
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}
