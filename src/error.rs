/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status のみ。error body は envelope middleware が書く)
 * - クライアント向け ErrorEnvelope の形と status → message の対応表
 */
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Status only. Error bodies are written exactly once, after dispatch,
        // by the error-envelope middleware.
        status.into_response()
    }
}

/// Uniform wire shape for failed requests:
/// `{"status":{"code":401,"error":true,"message":"Unauthorized"}}`
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub status: EnvelopeStatus,
}

#[derive(Debug, Serialize)]
pub struct EnvelopeStatus {
    pub code: u16,
    pub error: bool,
    pub message: &'static str,
}

impl ErrorEnvelope {
    pub fn for_status(status: StatusCode) -> Self {
        Self {
            status: EnvelopeStatus {
                code: status.as_u16(),
                error: true,
                message: message_for(status),
            },
        }
    }
}

/// Client-facing message per status code.
///
/// Only these four codes carry text; every other code in the error range
/// keeps an empty message.
fn message_for(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Page Not Found",
        500 => "Internal Server Error",
        _ => "",
    }
}
