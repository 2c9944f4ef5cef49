use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{CreateAccessTokenRequestBody, CreateAccessTokenResponse};
use crate::errors::CreateAccessTokenError;

pub async fn create_access_token(
    State(state): State<AppState>,
    Json(request): Json<CreateAccessTokenRequestBody>,
) -> Result<impl IntoResponse, CreateAccessTokenError> {
    let access_token = state
        .token_exchange
        .exchange_for_access_token(&request.refresh_token)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateAccessTokenResponse { access_token }),
    ))
}
