/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型と extractor
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - Bearer トークンの検証ロジックは middleware/services 側の責務
 */
use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use crate::state::AppState;

/// 認証済みのリクエストに付与されるコンテキスト
///
/// - `user_id` は内部ユーザー ID (整数)
/// - `jti` は監査/相関用 (必須ではない)
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub user_id: i64,
    pub jti: Option<String>,
}

impl AuthCtx {
    pub fn new(user_id: i64, jti: Option<String>) -> Self {
        Self { user_id, jti }
    }
}

/// Handler で AuthCtx を受け取るための extractor
/// middleware が AuthCtx を request.extensions() に insert 済みである前提
/// 見つからない場合は 401 を返す（認証がかかってない・ミドルウェア未設定）
pub struct AuthCtxExtractor(pub AuthCtx);

impl FromRequestParts<AppState> for AuthCtxExtractor
where
    AppState: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthCtx>()
            .cloned()
            .map(AuthCtxExtractor)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
