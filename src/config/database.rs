//! PostgreSQL connection pool initialization.
//!
//! The pool is created once at startup from `DATABASE_URL` and handed to the
//! revocation store. `acquire_timeout` bounds how long any ledger operation
//! can block waiting for a connection; a timeout surfaces to the caller as a
//! storage-unavailable error rather than an indefinite hang.

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::env;

/// Initializes the PostgreSQL connection pool.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set or the database is unreachable; the
/// service cannot run without its ledger.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
