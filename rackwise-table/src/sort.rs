//! Column sort state
//!
//! One column sorts at a time. Clicking a header cycles that column through
//! unsorted, ascending, descending, then back to unsorted; clicking a
//! different column starts it at ascending and drops the previous one.

use std::cmp::Ordering;

use crate::column::Column;
use crate::table::RowData;

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The single active sort column, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<(usize, SortDirection)>,
}

impl SortState {
    /// Creates an unsorted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the sort cycle for a column.
    pub fn toggle(&mut self, column: usize) {
        self.active = match self.active {
            Some((col, SortDirection::Ascending)) if col == column => {
                Some((column, SortDirection::Descending))
            }
            Some((col, SortDirection::Descending)) if col == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    /// Returns the sort direction of a column, if it is the active one.
    pub fn direction(&self, column: usize) -> Option<SortDirection> {
        match self.active {
            Some((col, dir)) if col == column => Some(dir),
            _ => None,
        }
    }

    /// Returns the active column and direction.
    pub fn active(&self) -> Option<(usize, SortDirection)> {
        self.active
    }

    /// Sorts row references by the active column's resolved text.
    ///
    /// Stable, so ties keep their incoming order. No active sort leaves the
    /// rows untouched.
    pub fn apply<'a, R: RowData>(&self, rows: &mut [&'a R], columns: &[Column<R>]) {
        let Some((index, direction)) = self.active else {
            return;
        };
        let Some(column) = columns.get(index) else {
            return;
        };

        rows.sort_by(|a, b| {
            let ordering = compare_cells(&column.resolve(a), &column.resolve(b));
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

/// Compares two cells numerically when both parse as numbers, otherwise
/// lexicographically.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}
