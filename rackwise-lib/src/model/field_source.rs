//! External-field source definitions

use serde::Deserialize;
use serde::Serialize;

/// A configurable external-field source as reported by the backend.
///
/// Only active sources contribute fields to the create/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSource {
    /// The field name this source provides.
    pub name: String,
    /// Whether the source is currently active.
    pub active: bool,
}

/// Filters a source list down to the names of active sources, preserving
/// server order.
pub fn active_field_names(sources: &[FieldSource]) -> Vec<String> {
    sources
        .iter()
        .filter(|s| s.active)
        .map(|s| s.name.clone())
        .collect()
}
