//! Database layer - connection pool, scoped sessions, repositories
//!
//! - One pooled connection per request, released on drop
//! - Reads only: no explicit transactions, no retries
//! - Connection failures surface as `DbError::Sqlx`

pub mod error;
pub mod pool;
pub mod repos;
pub mod session;

pub use error::DbError;
pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
pub use session::Session;
