//! Text filtering
//!
//! Two layers compose: a global query matched against every filterable
//! column, and independent per-column queries. All active queries are
//! case-insensitive substring matches over resolved cell text, combined
//! with AND.

use std::collections::HashMap;

use crate::column::Column;
use crate::table::RowData;

/// Global and per-column filter queries.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    global: String,
    per_column: HashMap<usize, String>,
}

impl FilterState {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the global free-text query.
    pub fn set_global(&mut self, query: impl Into<String>) {
        self.global = query.into();
    }

    /// Sets a per-column query; an empty query clears the column filter.
    pub fn set_column(&mut self, column: usize, query: impl Into<String>) {
        let query = query.into();
        if query.is_empty() {
            self.per_column.remove(&column);
        } else {
            self.per_column.insert(column, query);
        }
    }

    /// Drops every query.
    pub fn clear(&mut self) {
        self.global.clear();
        self.per_column.clear();
    }

    /// Checks whether any query is active.
    pub fn is_active(&self) -> bool {
        !self.global.is_empty() || !self.per_column.is_empty()
    }

    /// Checks a record against every active query.
    pub fn matches<R: RowData>(&self, record: &R, columns: &[Column<R>]) -> bool {
        if !self.global.is_empty() {
            let query = self.global.to_lowercase();
            let hit = columns
                .iter()
                .filter(|c| c.filterable)
                .any(|c| c.resolve(record).to_lowercase().contains(&query));
            if !hit {
                return false;
            }
        }

        self.per_column.iter().all(|(&index, query)| {
            columns.get(index).is_some_and(|column| {
                column
                    .resolve(record)
                    .to_lowercase()
                    .contains(&query.to_lowercase())
            })
        })
    }
}
