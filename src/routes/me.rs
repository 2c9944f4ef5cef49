use axum::response::IntoResponse;
use axum::Json;

use crate::domain::MeResponse;
use crate::utils::auth::AuthenticatedUser;

pub async fn me(AuthenticatedUser(identity): AuthenticatedUser) -> impl IntoResponse {
    Json(MeResponse {
        principal: identity.principal,
        authorities: identity.authorities,
    })
}
