//! Strict-Transport-Security for production deployments.
//!
//! Development runs plain HTTP, so the header is only attached when the
//! process is in production mode. TLS termination itself is an upstream
//! concern.

use axum::Router;
use axum::http::header::{HeaderValue, STRICT_TRANSPORT_SECURITY};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::Config;

/// Apply the HSTS header in production; no-op otherwise.
pub fn apply(router: Router, config: &Config) -> Router {
    if !config.app_env.is_production() {
        return router;
    }

    router.layer(SetResponseHeaderLayer::if_not_present(
        STRICT_TRANSPORT_SECURITY,
        HeaderValue::from_static("max-age=63072000; includeSubDomains"),
    ))
}
