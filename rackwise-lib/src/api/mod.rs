//! HTTP API operations

mod crud;
mod fields;
mod page;

pub use page::*;
