//! Authorization gate: a yes/no capability check on the shared API key.
//!
//! Runs as a route layer in front of every token operation. It answers one
//! question — does the caller hold the deployment's API credential — and
//! rejects with 401 before any handler executes. It knows nothing about
//! subjects or tokens.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::state::AppState;
use crate::utils::errors::AppError;

pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let presented = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Unauthorized("Invalid authorization header format".to_string())
    })?;

    if presented != state.api_config.api_key {
        return Err(AppError::Unauthorized("Invalid API key".to_string()));
    }

    Ok(next.run(req).await)
}
