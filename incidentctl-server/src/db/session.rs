//! Request-scoped database session
//!
//! A `Session` owns one pooled connection for the lifetime of a single
//! request. The connection goes back to the pool when the session is
//! dropped, whether the handler returned `Ok`, returned an error, or
//! panicked. Handlers must never stash it anywhere that outlives the
//! request.

use std::ops::{Deref, DerefMut};

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use sqlx::AnyConnection;
use sqlx::pool::PoolConnection;
use sqlx::{Any, AnyPool};

use super::DbError;

/// One pooled connection, exclusive to the current request
pub struct Session(PoolConnection<Any>);

impl Session {
    /// Acquire a connection from `pool`.
    pub async fn acquire(pool: &AnyPool) -> Result<Self, DbError> {
        let conn = pool.acquire().await?;
        tracing::trace!(
            idle = pool.num_idle(),
            size = pool.size(),
            "session acquired"
        );
        Ok(Self(conn))
    }
}

impl Deref for Session {
    type Target = AnyConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<S> FromRequestParts<S> for Session
where
    AnyPool: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = DbError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pool = AnyPool::from_ref(state);
        Self::acquire(&pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool_with_options;

    async fn single_connection_pool() -> (tempfile::TempDir, AnyPool) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("session.db").display());
        let pool = create_pool_with_options(&url, 1).await.unwrap();
        (dir, pool)
    }

    #[tokio::test]
    async fn drop_returns_connection_to_pool() {
        let (_dir, pool) = single_connection_pool().await;

        let session = Session::acquire(&pool).await.unwrap();
        assert_eq!(pool.num_idle(), 0);
        drop(session);

        // with max_connections = 1 this only succeeds if the first was released
        let again = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            Session::acquire(&pool),
        )
        .await
        .expect("connection was not released");
        assert!(again.is_ok());
    }

    #[tokio::test]
    async fn closed_pool_is_an_error() {
        let (_dir, pool) = single_connection_pool().await;
        pool.close().await;

        let err = Session::acquire(&pool).await.err().expect("acquire should fail");
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::PoolClosed)));
    }
}
