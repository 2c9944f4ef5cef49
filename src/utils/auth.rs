use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts};

use crate::app_state::AppState;
use crate::domain::IdentityContext;
use crate::errors::AuthenticationError;

/// Request-scoped authenticated identity, extracted from the bearer token.
///
/// Extraction validates the token and builds the identity context before
/// the handler runs; an invalid token rejects the request with 401. Every
/// request pays the full decode+verify cost, nothing is cached across
/// requests.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub IdentityContext);

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AuthenticationError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthenticationError::MissingBearerToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthenticationError::MissingBearerToken)?;

        if !state.token_provider.validate_token(token) {
            return Err(AuthenticationError::InvalidToken);
        }

        let identity = state.token_provider.authentication(token).map_err(|e| {
            // Unreachable for a token that just validated; a failure here is
            // a bug, not a bad request.
            log::error!("claims decode failed after validation: {}", e);
            AuthenticationError::InternalServerError
        })?;

        Ok(AuthenticatedUser(identity))
    }
}
