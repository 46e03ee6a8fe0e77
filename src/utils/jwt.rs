//! Token codec: creation, verification and unverified decoding of signed
//! credential tokens.
//!
//! Access and refresh tokens share one claim shape and one process-wide
//! signing key; they differ only in configured lifetime. [`decode_unsafe`]
//! exists for exactly one purpose: extracting a revocation lookup key from a
//! token that has already failed the expiry check. It returns
//! [`UnverifiedClaims`], which no authorization path accepts.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::tokens::model::{Claims, UnverifiedClaims};
use crate::utils::errors::TokenError;

/// Creates a signed token for a subject with the given lifetime in seconds.
///
/// The claim carries a fresh `jti` so two tokens minted for the same subject
/// in the same second are still distinct strings.
pub fn create_token(
    subject_id: i64,
    lifetime_secs: i64,
    jwt_config: &JwtConfig,
) -> Result<String, TokenError> {
    let now = Utc::now().timestamp();

    let claims = Claims {
        sub: subject_id,
        exp: (now + lifetime_secs) as usize,
        iat: now as usize,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::new(jwt_config.algorithm),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| TokenError::Creation(e.to_string()))
}

/// Verifies signature and expiry, returning the decoded claims.
///
/// Expiry is checked with zero leeway: a token whose `exp` is not strictly
/// in the future fails with [`TokenError::Expired`].
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(jwt_config.algorithm);
    validation.leeway = 0;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )?;

    Ok(data.claims)
}

/// Parses a token payload without checking the signature or expiry.
///
/// The result is only good for looking up revocation state; it must never be
/// trusted for an authorization decision. The distinct return type keeps the
/// two uses apart at compile time.
pub fn decode_unsafe(token: &str, jwt_config: &JwtConfig) -> Result<UnverifiedClaims, TokenError> {
    let mut validation = Validation::new(jwt_config.algorithm);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;

    let data = decode::<UnverifiedClaims>(token, &DecodingKey::from_secret(&[]), &validation)?;

    Ok(data.claims)
}
