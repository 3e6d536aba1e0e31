//! Networking modules for the auth REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and exposes them as injectable capabilities,
//! `types` defines the wire schema, and `error` the typed failures.

pub mod api;
pub mod error;
pub mod types;
