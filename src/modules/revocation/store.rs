//! Durable ledger of consumed refresh tokens.
//!
//! The store is the only shared mutable resource in the service. Its
//! `(token_value, subject_id)` primary key is what makes concurrent
//! rotations on one stale refresh token safe: both can pass the lookup, but
//! only one insert reports a new row, and the loser's rotation fails.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use super::model::RevokedToken;

/// Append/lookup access to the `revoked_tokens` table.
///
/// Holds its own pool handle; constructed once at startup and injected into
/// the operations that need it.
#[derive(Clone, Debug)]
pub struct RevocationStore {
    pool: PgPool,
}

impl RevocationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Whether a refresh token has already been consumed for this subject.
    #[instrument(skip_all)]
    pub async fn is_revoked(&self, token_value: &str, subject_id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM revoked_tokens WHERE token_value = $1 AND subject_id = $2)",
        )
        .bind(token_value)
        .bind(subject_id)
        .fetch_one(&self.pool)
        .await
    }

    /// Appends a tombstone for a refresh token.
    ///
    /// Idempotent: inserting an already-recorded key succeeds and returns
    /// `false`. The returned flag is load-bearing for rotation — a `false`
    /// there means a concurrent rotation already consumed the token.
    #[instrument(skip_all)]
    pub async fn record(
        &self,
        token_value: &str,
        subject_id: i64,
        expires_at: DateTime<Utc>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO revoked_tokens (token_value, subject_id, expires_at)
             VALUES ($1, $2, $3)
             ON CONFLICT (token_value, subject_id) DO NOTHING",
        )
        .bind(token_value)
        .bind(subject_id)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Fetches a ledger entry, if present.
    pub async fn find(
        &self,
        token_value: &str,
        subject_id: i64,
    ) -> Result<Option<RevokedToken>, sqlx::Error> {
        sqlx::query_as::<_, RevokedToken>(
            "SELECT token_value, subject_id, expires_at, revoked_at
             FROM revoked_tokens
             WHERE token_value = $1 AND subject_id = $2",
        )
        .bind(token_value)
        .bind(subject_id)
        .fetch_optional(&self.pool)
        .await
    }
}
