//! Database connection pool management
//!
//! Uses the sqlx `Any` driver so one code path serves PostgreSQL
//! (`postgres://...`) and SQLite (`sqlite:...`) URLs.

use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a connection pool for `database_url`.
///
/// # Errors
///
/// Returns an error if the URL scheme has no driver or the first
/// connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/incidents").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<AnyPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL or SQLite connection string
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<AnyPool, sqlx::Error> {
    // idempotent; must run before any Any connection is opened
    install_default_drivers();

    AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sqlite_pool_acquires_connection() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("pool.db").display());
        let pool = create_pool(&url).await.expect("pool creation failed");

        let result: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn unknown_scheme_is_an_error() {
        assert!(create_pool("nosuchdb://localhost/x").await.is_err());
    }

    // Run with: DATABASE_URL=postgres://... cargo test -p incidentctl-server -- --ignored
    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_pool_access() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        let handles: Vec<_> = (0..10i32)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i32,) = sqlx::query_as("SELECT $1::int")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i32);
        }
    }
}
