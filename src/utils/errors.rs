use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failures produced by the token codec.
///
/// Every branch is distinguishable by kind so callers can react to expiry
/// differently from tampering or garbage input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The string cannot be parsed as a token at all.
    #[error("token is malformed")]
    Malformed,

    /// Well-formed token whose signature does not validate.
    #[error("token signature is invalid")]
    InvalidSignature,

    /// Signature is valid but the expiry is in the past.
    #[error("token has expired")]
    Expired,

    /// Signing a new token failed.
    #[error("failed to sign token: {0}")]
    Creation(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed,
        }
    }
}

/// Application-level error taxonomy.
///
/// Token and credential failures map to 401 with a human-readable reason in
/// the response body; a revocation store outage maps to 503 and is never
/// treated as "not revoked".
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("token is malformed")]
    Malformed,

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,

    #[error("refresh token revoked")]
    Revoked,

    #[error("revocation store unavailable")]
    StorageUnavailable,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(String),

    #[error("internal server error")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_)
            | AppError::Malformed
            | AppError::InvalidSignature
            | AppError::Expired
            | AppError::Revoked => StatusCode::UNAUTHORIZED,
            AppError::StorageUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(detail) = &self {
            error!(detail = %detail, "Internal error");
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (self.status(), body).into_response()
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Malformed => AppError::Malformed,
            TokenError::InvalidSignature => AppError::InvalidSignature,
            TokenError::Expired => AppError::Expired,
            TokenError::Creation(detail) => AppError::Internal(detail),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        error!(error = %err, "Revocation store error");
        AppError::StorageUnavailable
    }
}
