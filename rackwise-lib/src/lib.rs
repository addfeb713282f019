//! Rack management API client library
//!
//! An async client for the warehouse rack management REST API: paginated
//! rack listing with rack-type enrichment, rack CRUD, and external-field
//! source discovery, plus the synchronization actions that orchestrate
//! them for a table front end.

pub mod api;
pub mod error;
pub mod model;
pub mod sync;

mod client;

pub use client::*;
