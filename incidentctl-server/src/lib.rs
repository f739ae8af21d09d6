//! incidentctl-server: read-only HTTP query service for fire/EMS incidents
//!
//! Serves address autocomplete, a filtered/paginated listing, and
//! single-record lookup over the `"Incidents"` table. Rows are written by
//! an external ingestion process; nothing here writes.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, create_pool_with_options, DbError, IncidentRepo, Session};
pub use http::{build_router, run_server, ApiError, AppState, CorsMode, ServerConfig, ServerError};
pub use models::Incident;
