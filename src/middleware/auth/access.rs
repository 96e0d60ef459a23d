//! Bearer access-token verification → AuthCtx を extensions に入れる
//!
//! Applied as a `route_layer`, so it only guards routes registered as
//! protected in the route table; unmatched paths fall through to the
//! router's 404 instead of a 401. Public routes never reach this code.
//!
//! Rejection is terminal and immediate: the handler is not invoked, the
//! reason goes to the log, and the client sees a uniform 401. The token
//! itself is never stored or logged.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::auth::{AuthError, AuthService, VerifiedAccessToken};
use crate::state::AppState;

/// Guard the given routes with bearer authentication.
///
/// 例：
/// ```ignore
/// let protected = middleware::auth::access::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let verified = match authenticate(&state.auth, req.headers()) {
        Ok(verified) => verified,
        Err(err) => {
            tracing::warn!(error = %err, "access token verification failed");
            return Err(AppError::Unauthorized);
        }
    };

    let auth_ctx = AuthCtx::new(verified.user_id, verified.jti);

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(auth_ctx);

    Ok(next.run(req).await)
}

/// The authentication decision for one request: extract the bearer token and
/// verify it against the shared secret. Pure and synchronous.
fn authenticate(
    auth: &AuthService,
    headers: &HeaderMap,
) -> Result<VerifiedAccessToken, AuthError> {
    let token = bearer_token(headers).ok_or(AuthError::MissingToken)?;
    auth.verify_verified(token)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();

    if token.is_empty() { None } else { Some(token) }
}
