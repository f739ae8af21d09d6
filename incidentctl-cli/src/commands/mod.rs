//! Command implementations for incidentctl CLI

pub mod serve;

pub use serve::run_serve;
