use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthenticationError {
    #[error("Missing or malformed Authorization header")]
    MissingBearerToken,

    #[error("Invalid token provided")]
    InvalidToken,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for AuthenticationError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AuthenticationError::MissingBearerToken => StatusCode::UNAUTHORIZED,
            AuthenticationError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthenticationError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
