//! Incident repository
//!
//! All substring filters go through `LOWER(address) LIKE LOWER(pattern) ESCAPE '\'`,
//! so column and needle are folded by the same database rules on
//! PostgreSQL and SQLite. No query sets an explicit ORDER BY; callers get
//! whatever order the database returns.

use sqlx::AnyConnection;

use crate::db::DbError;
use crate::models::incident::{create_table_sql, COLUMNS, TABLE};
use crate::models::{contains_pattern, Incident, Page, SearchTerm};

/// Maximum number of suggestions returned by address autocomplete
pub const AUTOCOMPLETE_LIMIT: i64 = 10;

/// Incident repository
pub struct IncidentRepo<'c> {
    conn: &'c mut AnyConnection,
}

impl<'c> IncidentRepo<'c> {
    pub fn new(conn: &'c mut AnyConnection) -> Self {
        Self { conn }
    }

    /// Apply the reference `CREATE TABLE IF NOT EXISTS` for this backend.
    pub async fn ensure_table(&mut self) -> Result<(), DbError> {
        let ddl = create_table_sql(self.conn.backend_name())
            .ok_or_else(|| DbError::UnsupportedBackend(self.conn.backend_name().to_owned()))?;

        sqlx::query(ddl).execute(&mut *self.conn).await?;
        tracing::info!(backend = self.conn.backend_name(), "incidents table ready");
        Ok(())
    }

    /// Distinct addresses containing `term`, ignoring case, at most
    /// `AUTOCOMPLETE_LIMIT` of them.
    pub async fn autocomplete_addresses(&mut self, term: &SearchTerm) -> Result<Vec<String>, DbError> {
        let pattern = contains_pattern(term.as_str());
        tracing::debug!(%pattern, "autocomplete addresses");

        let sql = format!(
            r#"SELECT DISTINCT address FROM {TABLE} WHERE LOWER(address) LIKE LOWER($1) ESCAPE '\' LIMIT $2"#
        );
        let addresses = sqlx::query_scalar::<_, String>(&sql)
            .bind(pattern)
            .bind(AUTOCOMPLETE_LIMIT)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(addresses)
    }

    /// List incidents, optionally filtered by an address substring.
    ///
    /// Offset is applied before limit.
    pub async fn list(&mut self, address: Option<&str>, page: Page) -> Result<Vec<Incident>, DbError> {
        tracing::debug!(?address, offset = page.offset(), limit = page.limit(), "list incidents");

        let incidents = match address {
            Some(needle) => {
                let sql = format!(
                    r#"SELECT {COLUMNS} FROM {TABLE} WHERE LOWER(address) LIKE LOWER($1) ESCAPE '\' LIMIT $2 OFFSET $3"#
                );
                sqlx::query_as::<_, Incident>(&sql)
                    .bind(contains_pattern(needle))
                    .bind(page.limit())
                    .bind(page.offset())
                    .fetch_all(&mut *self.conn)
                    .await?
            }
            None => {
                let sql = format!("SELECT {COLUMNS} FROM {TABLE} LIMIT $1 OFFSET $2");
                sqlx::query_as::<_, Incident>(&sql)
                    .bind(page.limit())
                    .bind(page.offset())
                    .fetch_all(&mut *self.conn)
                    .await?
            }
        };

        Ok(incidents)
    }

    /// Get one incident by its primary key (`id`, not `incident_id`).
    pub async fn get(&mut self, id: i32) -> Result<Incident, DbError> {
        let sql = format!("SELECT {COLUMNS} FROM {TABLE} WHERE id = $1");
        sqlx::query_as::<_, Incident>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "incident",
                id: id.to_string(),
            })
    }
}
