//! Token lifecycle operations: issuance, validation and the
//! refresh-rotation protocol.
//!
//! A refresh token moves through `issued` → `active` → (`consumed` |
//! `expired-unused`). Consumption and explicit revocation are terminal and
//! recorded in the ledger; an expired-unused token needs no record, its
//! signature check already rejects it.

use chrono::{DateTime, Utc};
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::modules::revocation::RevocationStore;
use crate::utils::errors::{AppError, TokenError};
use crate::utils::jwt::{create_token, decode_unsafe, verify_token};

use super::model::{Claims, TokenPair};

pub struct TokenService;

impl TokenService {
    /// Issues a fresh access/refresh pair for a subject.
    ///
    /// Two codec calls with the configured lifetimes; no other side effects.
    #[instrument(skip(jwt_config))]
    pub fn issue_pair(jwt_config: &JwtConfig, subject_id: i64) -> Result<TokenPair, AppError> {
        let access_token = create_token(subject_id, jwt_config.access_token_expiry, jwt_config)?;
        let refresh_token = create_token(subject_id, jwt_config.refresh_token_expiry, jwt_config)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Verifies an access token and returns its claims.
    #[instrument(skip_all)]
    pub fn validate(jwt_config: &JwtConfig, access_token: &str) -> Result<Claims, AppError> {
        Ok(verify_token(access_token, jwt_config)?)
    }

    /// The rotation protocol.
    ///
    /// A still-valid access token short-circuits to a no-op: the presented
    /// pair is returned unchanged, so refresh tokens are only consumed once
    /// the access token has actually expired. Otherwise the refresh token is
    /// checked against the ledger, fully verified, exchanged for a new pair,
    /// and tombstoned.
    ///
    /// The ledger write is a precondition for returning the new pair, not a
    /// best-effort side effect: if it fails, or another rotation already
    /// recorded this refresh token, the freshly issued pair is discarded and
    /// the call fails.
    #[instrument(skip_all)]
    pub async fn refresh(
        store: &RevocationStore,
        jwt_config: &JwtConfig,
        pair: TokenPair,
    ) -> Result<TokenPair, AppError> {
        match verify_token(&pair.access_token, jwt_config) {
            // Live session, nothing to rotate.
            Ok(_) => return Ok(pair),
            Err(TokenError::Expired) => {}
            Err(_) => {
                return Err(AppError::Unauthorized("access token invalid".to_string()));
            }
        }

        // Expired but structurally ours. The unverified subject is only a
        // ledger lookup key; authorization rests on the refresh token below.
        let lookup = decode_unsafe(&pair.access_token, jwt_config)
            .map_err(|_| AppError::Unauthorized("access token invalid".to_string()))?;

        if store.is_revoked(&pair.refresh_token, lookup.sub).await? {
            return Err(AppError::Revoked);
        }

        let refresh_claims = verify_token(&pair.refresh_token, jwt_config)
            .map_err(|_| AppError::Unauthorized("refresh token invalid".to_string()))?;

        let new_pair = Self::issue_pair(jwt_config, refresh_claims.sub)?;

        // The unique key on (token_value, subject_id) arbitrates concurrent
        // rotations: whoever inserts the tombstone keeps the new pair.
        let inserted = store
            .record(
                &pair.refresh_token,
                refresh_claims.sub,
                claim_expiry(refresh_claims.exp)?,
            )
            .await?;
        if !inserted {
            return Err(AppError::Revoked);
        }

        Ok(new_pair)
    }

    /// Logout: tombstones the refresh token without issuing anything.
    ///
    /// Requires a currently valid access token — an expired session cannot
    /// self-revoke its refresh token through this path.
    #[instrument(skip_all)]
    pub async fn revoke(
        store: &RevocationStore,
        jwt_config: &JwtConfig,
        pair: TokenPair,
    ) -> Result<(), AppError> {
        verify_token(&pair.access_token, jwt_config)?;

        let refresh_claims = verify_token(&pair.refresh_token, jwt_config)
            .map_err(|_| AppError::Unauthorized("refresh token invalid".to_string()))?;

        // Inserted-or-not both succeed: logging out twice is fine.
        store
            .record(
                &pair.refresh_token,
                refresh_claims.sub,
                claim_expiry(refresh_claims.exp)?,
            )
            .await?;

        Ok(())
    }
}

fn claim_expiry(exp: usize) -> Result<DateTime<Utc>, AppError> {
    DateTime::from_timestamp(exp as i64, 0)
        .ok_or_else(|| AppError::Internal("claim expiry out of timestamp range".to_string()))
}
