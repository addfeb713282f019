//! Page type for paginated rack listings.

use serde::Deserialize;
use serde::Serialize;

use crate::model::RawRack;

/// A page of rack records with pagination metadata.
///
/// Mirrors the backend's list envelope: the records for the requested page
/// plus the total record count and the number of pages at the requested
/// page size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RackPage {
    /// The records on this page.
    pub data: Vec<RawRack>,
    /// Total number of records across all pages.
    pub total: u64,
    /// Total number of pages at the requested page size.
    pub pages: u64,
}

impl RackPage {
    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of records on this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }
}
