//! Incident record and its table mapping
//!
//! Rows are written by an external ingestion process. This service only
//! reads them, so nothing here validates field contents: timestamps stay
//! as whatever text was stored.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Quoted table name (mixed case, so it must stay quoted on PostgreSQL)
pub const TABLE: &str = r#""Incidents""#;

/// Column list in declaration order
pub const COLUMNS: &str = "id, incident_id, type, alarm, enroute_time, arrive_time, \
                           address, apparatus, total, scan_date, created_at";

const CREATE_TABLE_POSTGRES: &str = r#"
CREATE TABLE IF NOT EXISTS "Incidents" (
    id SERIAL PRIMARY KEY,
    incident_id TEXT UNIQUE,
    type TEXT,
    alarm INTEGER,
    enroute_time TEXT,
    arrive_time TEXT,
    address TEXT,
    apparatus TEXT,
    total INTEGER,
    scan_date TEXT,
    created_at TEXT
)
"#;

const CREATE_TABLE_SQLITE: &str = r#"
CREATE TABLE IF NOT EXISTS "Incidents" (
    id INTEGER PRIMARY KEY,
    incident_id TEXT UNIQUE,
    type TEXT,
    alarm INTEGER,
    enroute_time TEXT,
    arrive_time TEXT,
    address TEXT,
    apparatus TEXT,
    total INTEGER,
    scan_date TEXT,
    created_at TEXT
)
"#;

/// Reference DDL for the given sqlx backend name.
///
/// Only the primary key differs: `SERIAL` on PostgreSQL, rowid alias on
/// SQLite. Returns `None` for backends we don't know.
pub fn create_table_sql(backend_name: &str) -> Option<&'static str> {
    match backend_name {
        "PostgreSQL" => Some(CREATE_TABLE_POSTGRES),
        "SQLite" => Some(CREATE_TABLE_SQLITE),
        _ => None,
    }
}

/// One fire/EMS dispatch record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Incident {
    pub id: i32,
    pub incident_id: Option<String>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: Option<String>,
    pub alarm: Option<i32>,
    pub enroute_time: Option<String>,
    pub arrive_time: Option<String>,
    pub address: Option<String>,
    pub apparatus: Option<String>,
    pub total: Option<i32>,
    pub scan_date: Option<String>,
    pub created_at: Option<String>,
}
