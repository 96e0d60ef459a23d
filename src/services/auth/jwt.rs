//! HS256 access-token signing and verification.
//!
//! The same shared secret signs outgoing tokens and verifies incoming ones.
//! Verification is signature + `exp` only: tokens carry no issuer or audience
//! contract in this deployment, so neither is checked.

use std::{error::Error as StdError, fmt};

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::config::JwtSecret;
use crate::error::AppError;

/// Why a bearer token was rejected.
///
/// Every variant collapses to HTTP 401 at the middleware boundary; the split
/// exists for logs and tests only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    MissingToken,
    InvalidSignature,
    ExpiredToken,
    InvalidSubject,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingToken => write!(f, "missing token"),
            Self::InvalidSignature => write!(f, "invalid signature"),
            Self::ExpiredToken => write!(f, "expired token"),
            Self::InvalidSubject => write!(f, "invalid 'sub' (expected integer user id)"),
        }
    }
}

impl StdError for AuthError {}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            ErrorKind::ExpiredSignature => Self::ExpiredToken,
            // Malformed tokens, bad MACs, wrong algorithm: all the same to the client.
            _ => Self::InvalidSignature,
        }
    }
}

/// Access token (JWT) claims.
///
/// NOTE:
/// - `sub` stays a string on the wire; project convention is an integer user id.
/// - `iat`/`jti` are written on issue but optional on verify.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub sub: String,
    pub exp: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

/// 検証済み・アプリ側で使う型
///
/// - `sub` はプロジェクト規約として整数のユーザー ID なので、ここで `i64` に昇格させる
/// - 署名と `exp` の整合性は `verify` の中で保証される前提
#[derive(Debug, Clone)]
pub struct VerifiedAccessToken {
    pub user_id: i64,
    pub jti: Option<String>,
}

/// HS256 access-token issuer + verifier over the process-wide shared secret.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: u64,
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("AuthService")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl AuthService {
    pub fn new(secret: &JwtSecret, ttl_seconds: u64, leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_seconds;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_seconds,
        }
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Issue a signed access token for `user_id`.
    pub fn issue(&self, user_id: i64) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = AccessTokenClaims {
            sub: user_id.to_string(),
            exp: now + self.ttl_seconds as i64,
            iat: Some(now),
            jti: Some(Uuid::new_v4().to_string()),
        };

        let header = Header::new(Algorithm::HS256);
        jsonwebtoken::encode(&header, &claims, &self.encoding_key).map_err(|e| {
            error!(error = %e, "failed to sign access token");
            AppError::Internal
        })
    }

    /// Verify and decode a bearer token: signature + `exp` (with configured leeway).
    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, AuthError> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }

    /// Verify, then convert claims into an application-friendly type.
    ///
    /// This is the recommended entry point for middleware.
    pub fn verify_verified(&self, token: &str) -> Result<VerifiedAccessToken, AuthError> {
        let claims = self.verify(token)?;

        let user_id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| AuthError::InvalidSubject)?;

        Ok(VerifiedAccessToken {
            user_id,
            jti: claims.jti,
        })
    }
}
