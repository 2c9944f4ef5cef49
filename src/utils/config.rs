use std::env;

use dotenvy::dotenv;
use thiserror::Error;

const DEFAULT_ACCESS_TOKEN_TTL_SECONDS: i64 = 7200;

/// Trust configuration for the token subsystem, built once at startup and
/// passed by reference into the services that need it. The secret is never
/// logged.
#[derive(Clone)]
pub struct Config {
    issuer: String,
    secret: String,
    access_token_ttl_seconds: i64,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("env var {0} must not be empty")]
    Empty(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

impl Config {
    pub fn issuer(&self) -> &str {
        &self.issuer
    }
    pub fn secret(&self) -> &str {
        &self.secret
    }
    pub fn access_token_ttl_seconds(&self) -> i64 {
        self.access_token_ttl_seconds
    }

    pub fn new(
        issuer: String,
        secret: String,
        access_token_ttl_seconds: i64,
    ) -> Result<Self, ConfigError> {
        if issuer.is_empty() {
            return Err(ConfigError::Empty("JWT_ISSUER"));
        }
        if secret.is_empty() {
            return Err(ConfigError::Empty("JWT_SECRET"));
        }
        if access_token_ttl_seconds <= 0 {
            return Err(ConfigError::Invalid("ACCESS_TOKEN_TTL_SECONDS"));
        }

        Ok(Self {
            issuer,
            secret,
            access_token_ttl_seconds,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let issuer = req_var("JWT_ISSUER")?;
        let secret = req_var("JWT_SECRET")?;

        let access_token_ttl_seconds = match opt_var("ACCESS_TOKEN_TTL_SECONDS") {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| ConfigError::Invalid("ACCESS_TOKEN_TTL_SECONDS"))?,
            None => DEFAULT_ACCESS_TOKEN_TTL_SECONDS,
        };

        Self::new(issuer, secret, access_token_ttl_seconds)
    }
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}
