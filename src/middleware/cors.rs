//! CORS policy for browser clients.
//!
//! Note:
//! - CORS is enforced by browsers. Native mobile apps and server-to-server
//!   calls are not restricted by CORS.
//! - This middleware should be applied at the Router level (not inside
//!   handlers), outermost, so the headers also cover rewritten error bodies.
//!
//! Policy:
//! - Any origin, any method, any header, WITHOUT credentials. The API is
//!   bearer-token based, so cross-origin callers carry their own credential
//!   in the Authorization header.
//!
//! IMPORTANT:
//! - Do not combine the wildcard origin with `allow_credentials(true)`.

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

/// Apply the wildcard CORS policy to the given Router.
pub fn apply(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(60 * 10));

    router.layer(cors)
}
