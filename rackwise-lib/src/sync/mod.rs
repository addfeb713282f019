//! Rack synchronization actions
//!
//! The orchestration layer that ties the API client to the table view:
//! paginated listing with the rack-type join, mutations that refresh the
//! current page, dependency loading for the edit form, and external-field
//! discovery.

mod actions;
mod notify;
mod state;

pub use actions::*;
pub use notify::*;
pub use state::*;
