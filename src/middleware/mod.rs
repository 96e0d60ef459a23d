/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 * - 各ファイルが pub fn apply(...) を提供する
 */
pub mod auth;
pub mod cors;
pub mod error_envelope;
pub mod hsts;
pub mod http;
