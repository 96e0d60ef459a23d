/*
 * Responsibility
 * - POST /users/authenticate (credential check → access token 発行)
 * - Public route として登録される。Bearer 検証の対象外
 */
use axum::{Json, extract::State};

use crate::api::v1::dto::auth::{AuthenticateRequest, AuthenticateResponse};
use crate::error::AppError;
use crate::state::AppState;

pub async fn authenticate_user(
    State(state): State<AppState>,
    Json(req): Json<AuthenticateRequest>,
) -> Result<Json<AuthenticateResponse>, AppError> {
    req.validate()
        .map_err(|msg| AppError::InvalidRequest(msg.to_string()))?;

    // Unknown username and wrong password are indistinguishable to the client.
    let user = state
        .users
        .authenticate(&req.username, &req.password)
        .ok_or_else(|| AppError::InvalidRequest("username or password is incorrect".to_string()))?;

    let token = state.auth.issue(user.id)?;

    Ok(Json(AuthenticateResponse {
        id: user.id,
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        username: user.username.clone(),
        token,
        expires_in: state.auth.ttl_seconds(),
    }))
}
