//! Shared domain types and contracts for the homelink project.
//!
//! Pure data and trait definitions only. This crate performs no I/O, so the
//! client library, the CLI, and the mock gateway all share one source of
//! truth for the wire formats and connection settings.

pub mod appliance;
pub mod config;
pub mod transport;
