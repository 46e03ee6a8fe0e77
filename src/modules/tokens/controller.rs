use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;
use utoipa::ToSchema;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{Claims, LoginRequest, TokenPair};
use super::service::TokenService;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Issue a fresh access/refresh pair for a subject
#[utoipa::path(
    post,
    path = "/api/tokens/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Pair issued", body = TokenPair),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("api_key" = [])),
    tag = "Tokens"
)]
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenPair>, AppError> {
    let pair = TokenService::issue_pair(&state.jwt_config, dto.subject_id)?;
    Ok(Json(pair))
}

/// Verify an access token and return its decoded claims
#[utoipa::path(
    post,
    path = "/api/tokens/validate",
    request_body = TokenPair,
    responses(
        (status = 200, description = "Access token is valid", body = Claims),
        (status = 401, description = "Expired or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("api_key" = [])),
    tag = "Tokens"
)]
#[instrument(skip_all)]
pub async fn validate(
    State(state): State<AppState>,
    ValidatedJson(pair): ValidatedJson<TokenPair>,
) -> Result<Json<Claims>, AppError> {
    let claims = TokenService::validate(&state.jwt_config, &pair.access_token)?;
    Ok(Json(claims))
}

/// Rotate an expired pair, or echo a still-live pair unchanged
#[utoipa::path(
    post,
    path = "/api/tokens/refresh",
    request_body = TokenPair,
    responses(
        (status = 200, description = "New or unchanged pair", body = TokenPair),
        (status = 401, description = "Invalid or revoked token", body = ErrorResponse),
        (status = 503, description = "Revocation store unavailable", body = ErrorResponse)
    ),
    security(("api_key" = [])),
    tag = "Tokens"
)]
#[instrument(skip_all)]
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(pair): ValidatedJson<TokenPair>,
) -> Result<Json<TokenPair>, AppError> {
    let pair = TokenService::refresh(&state.revocation, &state.jwt_config, pair).await?;
    Ok(Json(pair))
}

/// Revoke a refresh token (logout)
#[utoipa::path(
    post,
    path = "/api/tokens/logout",
    request_body = TokenPair,
    responses(
        (status = 204, description = "Refresh token revoked"),
        (status = 401, description = "Invalid token", body = ErrorResponse),
        (status = 503, description = "Revocation store unavailable", body = ErrorResponse)
    ),
    security(("api_key" = [])),
    tag = "Tokens"
)]
#[instrument(skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    ValidatedJson(pair): ValidatedJson<TokenPair>,
) -> Result<StatusCode, AppError> {
    TokenService::revoke(&state.revocation, &state.jwt_config, pair).await?;
    Ok(StatusCode::NO_CONTENT)
}
