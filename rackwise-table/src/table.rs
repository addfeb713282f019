//! The generic tabular renderer
//!
//! Resolves ordered records against ordered column descriptors into plain
//! display text: one header cell per column, one row of cells per record.
//! The renderer performs no network or state access; selection state is
//! borrowed from the caller and only read.

use crate::column::Column;
use crate::selection::SelectionSet;
use crate::sort::SortDirection;
use crate::sort::SortState;

/// Row records the renderer can resolve.
///
/// `field` takes a dotted path ("racktype_data.name") and returns the
/// display text for that field, or `None` when the path is unknown or the
/// value is absent.
pub trait RowData {
    /// Stable identifier for selection and row events.
    fn row_id(&self) -> i64;

    /// Resolves a dotted field path into display text.
    fn field(&self, path: &str) -> Option<String>;
}

/// A resolved header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Header display text.
    pub title: String,
    /// Sort direction when this column is the active sort.
    pub sort: Option<SortDirection>,
    /// Whether the column responds to sort toggles.
    pub sortable: bool,
}

/// A resolved data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// The record's row id.
    pub id: i64,
    /// Selection flag; `None` when the table renders without selection.
    pub selected: Option<bool>,
    /// Resolved cell text, one per column.
    pub cells: Vec<String>,
}

/// A fully resolved table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    /// Header cells, one per column.
    pub header: Vec<HeaderCell>,
    /// State of the leading select-all checkbox; `None` without selection.
    pub all_selected: Option<bool>,
    /// Resolved rows in the order given.
    pub rows: Vec<RenderedRow>,
}

/// Renders records against a fixed column list.
#[derive(Debug, Clone)]
pub struct TableRenderer<R> {
    columns: Vec<Column<R>>,
}

impl<R: RowData> TableRenderer<R> {
    /// Creates a renderer over the given columns.
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self { columns }
    }

    /// Returns the column descriptors.
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Resolves records into a table, in the order given.
    ///
    /// With a selection set, each row carries its selection flag and the
    /// header carries the select-all state; without one, both are `None`.
    pub fn render<'a>(
        &self,
        records: impl IntoIterator<Item = &'a R>,
        sort: &SortState,
        selection: Option<&SelectionSet>,
    ) -> RenderedTable
    where
        R: 'a,
    {
        let header = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| HeaderCell {
                title: column.header.clone(),
                sort: sort.direction(index),
                sortable: column.sortable,
            })
            .collect();

        let rows: Vec<RenderedRow> = records
            .into_iter()
            .map(|record| RenderedRow {
                id: record.row_id(),
                selected: selection.map(|s| s.is_selected(record.row_id())),
                cells: self.columns.iter().map(|c| c.resolve(record)).collect(),
            })
            .collect();

        let all_selected = selection.map(|s| {
            let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
            s.all_selected(&ids)
        });

        RenderedTable {
            header,
            all_selected,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        id: i64,
        name: String,
        count: u32,
    }

    impl RowData for Row {
        fn row_id(&self) -> i64 {
            self.id
        }

        fn field(&self, path: &str) -> Option<String> {
            match path {
                "name" => Some(self.name.clone()),
                "count" => Some(self.count.to_string()),
                _ => None,
            }
        }
    }

    fn renderer() -> TableRenderer<Row> {
        TableRenderer::new(vec![
            Column::field("Name", "name"),
            Column::field("Count", "count"),
        ])
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: 1,
                name: "alpha".into(),
                count: 3,
            },
            Row {
                id: 2,
                name: "beta".into(),
                count: 5,
            },
        ]
    }

    #[test]
    fn test_render_resolves_cells_in_order() {
        let data = rows();
        let table = renderer().render(&data, &SortState::new(), None);

        assert_eq!(table.header.len(), 2);
        assert_eq!(table.header[0].title, "Name");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].cells, vec!["alpha", "3"]);
        assert_eq!(table.rows[1].id, 2);
        assert_eq!(table.all_selected, None);
        assert_eq!(table.rows[0].selected, None);
    }

    #[test]
    fn test_render_with_selection_flags_rows() {
        let data = rows();
        let mut selection = SelectionSet::new();
        selection.toggle(2);

        let table = renderer().render(&data, &SortState::new(), Some(&selection));
        assert_eq!(table.rows[0].selected, Some(false));
        assert_eq!(table.rows[1].selected, Some(true));
        assert_eq!(table.all_selected, Some(false));
    }

    #[test]
    fn test_select_all_reflects_exact_selection() {
        let data = rows();
        let mut selection = SelectionSet::new();
        selection.set_all(&[1, 2], true);

        let table = renderer().render(&data, &SortState::new(), Some(&selection));
        assert_eq!(table.all_selected, Some(true));
    }

    #[test]
    fn test_header_carries_sort_direction() {
        let data = rows();
        let mut sort = SortState::new();
        sort.toggle(1);

        let table = renderer().render(&data, &sort, None);
        assert_eq!(table.header[0].sort, None);
        assert_eq!(table.header[1].sort, Some(SortDirection::Ascending));
    }
}
