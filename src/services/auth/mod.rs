/*!
 * Authentication services.
 *
 * Responsibility:
 * - HS256 access token の発行と検証 (jwt)
 * - 検証失敗理由の分類 (AuthError)
 *
 * Public API:
 * - AuthService
 * - AuthError / AccessTokenClaims / VerifiedAccessToken
 */

pub mod jwt;

pub use jwt::{AccessTokenClaims, AuthError, AuthService, VerifiedAccessToken};
