use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use crate::dispatch::Body;
use crate::dto::{LoginRequest, LoginResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn login_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<LoginResponse>> {
    let Body(payload) = Body::<LoginRequest>::from_bytes(&body)?;
    let username = payload.username.clone();

    let token = state.services.auth.login(payload.into()).await.map_err(|error| {
        tracing::warn!(kind = error.kind(), error = %error, "login failed");
        error
    })?;

    Ok(Json(LoginResponse { username, token }))
}
