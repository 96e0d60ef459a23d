/*!
 * Extractors shared by v1 handlers.
 *
 * Public API:
 * - AuthCtx / AuthCtxExtractor
 */

pub mod auth_ctx;

pub use auth_ctx::{AuthCtx, AuthCtxExtractor};
