//! Column descriptors
//!
//! A column pairs a header with an accessor that resolves a record into
//! display text: either a dotted field path looked up through [`RowData`],
//! or an arbitrary derivation function.

use std::fmt;
use std::sync::Arc;

use crate::table::RowData;

/// How a column resolves a record into display text.
pub enum Accessor<R> {
    /// Dotted field path resolved through [`RowData::field`].
    Field(String),
    /// Derivation function from the record to display text.
    Derived(Arc<dyn Fn(&R) -> String + Send + Sync>),
}

impl<R> Clone for Accessor<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Field(path) => Self::Field(path.clone()),
            Self::Derived(f) => Self::Derived(Arc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for Accessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(path) => f.debug_tuple("Field").field(path).finish(),
            Self::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// Column configuration.
///
/// # Example
///
/// ```ignore
/// let columns = vec![
///     Column::field("ID", "rack_id"),
///     Column::field("Type", "racktype_data.name").filterable(false),
///     Column::derived("Code", |r: &RackRecord| r.rms_rack_code.clone()),
/// ];
/// ```
#[derive(Debug, Clone)]
pub struct Column<R> {
    /// Column header text.
    pub header: String,
    /// Cell resolution strategy.
    pub accessor: Accessor<R>,
    /// Whether the column participates in sorting.
    pub sortable: bool,
    /// Whether the column participates in text filtering.
    pub filterable: bool,
}

impl<R: RowData> Column<R> {
    /// Creates a column resolved by dotted field path.
    pub fn field(header: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            accessor: Accessor::Field(path.into()),
            sortable: true,
            filterable: true,
        }
    }

    /// Creates a column resolved by a derivation function.
    pub fn derived(
        header: impl Into<String>,
        derive: impl Fn(&R) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            header: header.into(),
            accessor: Accessor::Derived(Arc::new(derive)),
            sortable: true,
            filterable: true,
        }
    }

    /// Sets whether the column is sortable.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets whether the column is filterable.
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Resolves the record into this column's display text.
    ///
    /// A field path that the record does not know resolves to the empty
    /// string rather than failing the render.
    pub fn resolve(&self, record: &R) -> String {
        match &self.accessor {
            Accessor::Field(path) => record.field(path).unwrap_or_default(),
            Accessor::Derived(f) => f(record),
        }
    }
}
