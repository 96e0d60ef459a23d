/*
 * Responsibility
 * - /users 系の read handler
 * - AuthCtx は extractor 経由で受け取る (検証は middleware 側の責務)
 */
use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::v1::dto::users::UserResponse;
use crate::api::v1::extractors::AuthCtxExtractor;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserResponse>> {
    let res = state
        .users
        .all()
        .iter()
        .map(UserResponse::from_record)
        .collect();

    Json(res)
}

/// GET /users/me: the caller, as derived from the verified token.
pub async fn me(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.users.get(ctx.user_id).ok_or(AppError::NotFound)?;
    Ok(Json(UserResponse::from_record(user)))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.users.get(user_id).ok_or(AppError::NotFound)?;
    Ok(Json(UserResponse::from_record(user)))
}
