//! Repository implementations for database access
//!
//! Repositories borrow a connection (usually a request's `Session`) and
//! never hold on to it past a single call chain.

pub mod incidents;

pub use incidents::{IncidentRepo, AUTOCOMPLETE_LIMIT};
