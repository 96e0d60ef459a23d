//! Uniform JSON error bodies.
//!
//! Inspects the final status code after route dispatch and rewrites the body
//! of every 4xx/5xx response into the `{"status": {...}}` envelope, whatever
//! stage produced it: bearer-auth rejection (401), the router itself (404),
//! an application handler, or the panic/timeout boundary. 2xx/3xx responses
//! pass through untouched.
//!
//! Applied once, outside the stages whose failures it reports on. Status and
//! headers are preserved; only the body and content-type change.

use axum::{
    Router,
    body::Body,
    extract::Request,
    http::{
        HeaderValue,
        header::{CONTENT_LENGTH, CONTENT_TYPE},
    },
    middleware::{self, Next},
    response::Response,
};

use crate::error::ErrorEnvelope;

/// Apply the envelope rewrite to the given Router.
pub fn apply(router: Router) -> Router {
    router.layer(middleware::from_fn(rewrite_error_body))
}

async fn rewrite_error_body(req: Request, next: Next) -> Response {
    let res = next.run(req).await;

    let status = res.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return res;
    }

    let envelope = ErrorEnvelope::for_status(status);
    // A static struct of ints and &'static strs cannot fail to serialize;
    // fall back to an empty body rather than panicking inside the error path.
    let body = serde_json::to_vec(&envelope).unwrap_or_default();

    let (mut parts, _) = res.into_parts();
    parts.headers.remove(CONTENT_LENGTH);
    parts
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Response::from_parts(parts, Body::from(body))
}

#[cfg(test)]
mod tests {
    use axum::{
        Json, Router,
        body::to_bytes,
        http::{Request, StatusCode, header::CONTENT_TYPE},
        response::IntoResponse,
        routing::get,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::apply;

    async fn send(app: Router, uri: &str) -> (StatusCode, Option<String>, Value) {
        let res = app
            .oneshot(Request::get(uri).body(axum::body::Body::empty()).unwrap())
            .await
            .unwrap();

        let status = res.status();
        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, content_type, body)
    }

    #[tokio::test]
    async fn handler_500_body_is_replaced_with_the_envelope() {
        async fn failing() -> impl IntoResponse {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": "boom"})),
            )
        }

        let app = apply(Router::new().route("/boom", get(failing)));
        let (status, content_type, body) = send(app, "/boom").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(
            body,
            json!({"status": {"code": 500, "error": true, "message": "Internal Server Error"}})
        );
    }

    #[tokio::test]
    async fn success_responses_pass_through_unmodified() {
        async fn ok() -> impl IntoResponse {
            Json(json!({"hello": "world"}))
        }

        let app = apply(Router::new().route("/ok", get(ok)));
        let (status, _, body) = send(app, "/ok").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"hello": "world"}));
    }

    #[tokio::test]
    async fn unknown_routes_become_page_not_found() {
        let app = apply(Router::new());
        let (status, content_type, body) = send(app, "/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(
            body,
            json!({"status": {"code": 404, "error": true, "message": "Page Not Found"}})
        );
    }

    #[tokio::test]
    async fn unmapped_error_codes_keep_an_empty_message() {
        async fn teapot() -> impl IntoResponse {
            StatusCode::IM_A_TEAPOT
        }

        let app = apply(Router::new().route("/teapot", get(teapot)));
        let (status, _, body) = send(app, "/teapot").await;

        assert_eq!(status, StatusCode::IM_A_TEAPOT);
        assert_eq!(
            body,
            json!({"status": {"code": 418, "error": true, "message": ""}})
        );
    }

    #[tokio::test]
    async fn panicking_handler_surfaces_as_a_500_envelope() {
        async fn panics() -> &'static str {
            panic!("handler blew up")
        }

        // Same composition as build_app: the panic boundary sits inside the
        // envelope stage.
        let app = apply(crate::middleware::http::apply(
            Router::new().route("/panic", get(panics)),
        ));
        let (status, _, body) = send(app, "/panic").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"status": {"code": 500, "error": true, "message": "Internal Server Error"}})
        );
    }
}
