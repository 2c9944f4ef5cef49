use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::services::token_exchange::ExchangeError;

#[derive(Error, Debug)]
pub enum CreateAccessTokenError {
    #[error("Unknown refresh token")]
    UnknownRefreshToken,

    #[error("Refresh token owner no longer exists")]
    UnknownPrincipal,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl From<ExchangeError> for CreateAccessTokenError {
    fn from(err: ExchangeError) -> Self {
        match err {
            ExchangeError::UnknownRefreshToken => CreateAccessTokenError::UnknownRefreshToken,
            ExchangeError::UnknownPrincipal => CreateAccessTokenError::UnknownPrincipal,
            ExchangeError::Generate(_) => CreateAccessTokenError::InternalServerError,
        }
    }
}

impl IntoResponse for CreateAccessTokenError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            CreateAccessTokenError::UnknownRefreshToken => StatusCode::UNAUTHORIZED,
            CreateAccessTokenError::UnknownPrincipal => StatusCode::UNAUTHORIZED,
            CreateAccessTokenError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
