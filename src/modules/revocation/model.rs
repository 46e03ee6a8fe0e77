use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row model for the `revoked_tokens` ledger.
///
/// A row is a permanent tombstone for a consumed or logged-out refresh
/// token. Rows are only ever inserted; pruning of expired entries is left to
/// external maintenance.
#[derive(Debug, Clone, FromRow)]
pub struct RevokedToken {
    pub token_value: String,
    pub subject_id: i64,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: DateTime<Utc>,
}

impl RevokedToken {
    /// Whether the underlying token has passed its own expiry.
    ///
    /// Expired entries stay in the ledger but no longer gate anything, since
    /// the token would fail signature verification anyway.
    #[inline]
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}
