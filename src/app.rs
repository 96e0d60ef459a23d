/*
 * Responsibility
 * - Config 読み込み → 依存生成 → Router 組み立て
 * - Middleware pipeline の適用順を一箇所で決める (CORS / envelope / Bearer など)
 * - axum::serve() で起動
 */
use std::{panic, sync::Arc};

use anyhow::Result;
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::config::Config;
use crate::middleware;
use crate::services::{auth::AuthService, users::UserDirectory};
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,user_auth_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook() {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Surface panics via tracing so they don't get "lost"
        // (stderr can be hidden depending on how the process is launched).
        // Handler panics are additionally caught by the pipeline's panic
        // boundary and answered as a 500.
        tracing::error!(?info, "panic");
        default_hook(info);
    }));
}

pub async fn run() -> Result<()> {
    init_tracing();
    init_panic_hook();

    let config = Config::from_env()?;

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config);
    let app = build_app(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build process-level services and inject them into the shared state.
pub fn build_state(config: &Config) -> AppState {
    let auth = Arc::new(AuthService::new(
        &config.jwt_secret,
        config.access_token_ttl_seconds,
        config.token_leeway_seconds,
    ));
    let users = Arc::new(UserDirectory::seeded());

    AppState::new(auth, users)
}

/// Assemble the full middleware pipeline around the v1 routes.
///
/// Stage order, outermost first:
/// CORS → HSTS (production) → error envelope → HTTP infra (request id,
/// body limit, timeout, panic boundary, trace) → router. Protected routes
/// additionally carry the bearer-auth route layer; the envelope stage sits
/// outside everything that can produce an error status, so it rewrites all
/// of them exactly once.
pub fn build_app(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .nest("/api/v1", api::v1::routes(state.clone()))
        .with_state(state);

    let router = middleware::http::apply(router);
    let router = middleware::error_envelope::apply(router);
    let router = middleware::hsts::apply(router, config);

    middleware::cors::apply(router)
}
