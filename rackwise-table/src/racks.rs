//! The rack table view
//!
//! Binds the generic renderer to the twelve-column rack schema and holds
//! the view-local state: sort, filters, selection, and the pending-delete
//! confirmation step. Rows never change optimistically; the view renders
//! whatever record list the caller supplies, and mutations go through the
//! synchronization actions elsewhere.

use rackwise_lib::model::RackRecord;

use crate::column::Column;
use crate::filter::FilterState;
use crate::selection::SelectionSet;
use crate::sort::SortState;
use crate::table::RenderedTable;
use crate::table::RowData;
use crate::table::TableRenderer;

impl RowData for RackRecord {
    fn row_id(&self) -> i64 {
        self.rack_id
    }

    fn field(&self, path: &str) -> Option<String> {
        if let Some(type_field) = path.strip_prefix("racktype_data.") {
            let rack_type = self.racktype_data.as_ref()?;
            return match type_field {
                "name" => Some(rack_type.name.clone()),
                "dim_x_mm" => Some(rack_type.dim_x_mm.to_string()),
                "dim_y_mm" => Some(rack_type.dim_y_mm.to_string()),
                "dim_z_mm" => Some(rack_type.dim_z_mm.to_string()),
                "floor_count" => Some(rack_type.floor_count.to_string()),
                "max_load_kg" => Some(rack_type.max_load_kg.to_string()),
                "feet_diameter_mm" => Some(rack_type.feet_diameter_mm.to_string()),
                _ => None,
            };
        }

        match path {
            "rack_id" => Some(self.rack_id.to_string()),
            "rms_rack_code" => Some(self.rms_rack_code.clone()),
            "erp_rack_code" => Some(self.erp_rack_code.clone()),
            "map_point_id" => self.map_point_id.map(|id| id.to_string()),
            "racktype_id" => Some(self.racktype_id.to_string()),
            _ => None,
        }
    }
}

/// The fixed rack column schema.
pub fn rack_columns() -> Vec<Column<RackRecord>> {
    vec![
        Column::field("ID", "rack_id"),
        Column::field("RMS code", "rms_rack_code"),
        Column::field("ERP code", "erp_rack_code"),
        Column::field("Map point", "map_point_id"),
        Column::field("Type", "racktype_data.name"),
        Column::field("Type ID", "racktype_id"),
        Column::field("Width (mm)", "racktype_data.dim_x_mm"),
        Column::field("Depth (mm)", "racktype_data.dim_y_mm"),
        Column::field("Height (mm)", "racktype_data.dim_z_mm"),
        Column::field("Floors", "racktype_data.floor_count"),
        Column::field("Max load (kg)", "racktype_data.max_load_kg"),
        Column::field("Feet diameter (mm)", "racktype_data.feet_diameter_mm"),
    ]
}

/// Events the rack table emits toward its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RackTableEvent {
    /// Navigate to the edit form for a rack.
    EditRequested(i64),
    /// A delete was requested and awaits confirmation.
    DeleteRequested(i64),
    /// The pending delete was confirmed; run the removal action.
    DeleteConfirmed(i64),
}

/// The rack table view state.
///
/// # Example
///
/// ```ignore
/// let mut table = RackTable::new();
/// table.toggle_sort(0);
/// table.set_global_filter("RMS");
/// let rendered = table.render(listing.racks.as_slice());
/// ```
#[derive(Debug, Clone)]
pub struct RackTable {
    renderer: TableRenderer<RackRecord>,
    sort: SortState,
    filter: FilterState,
    selection: SelectionSet,
    pending_delete: Option<i64>,
}

impl RackTable {
    /// Creates a rack table with the fixed column schema.
    pub fn new() -> Self {
        Self {
            renderer: TableRenderer::new(rack_columns()),
            sort: SortState::new(),
            filter: FilterState::new(),
            selection: SelectionSet::new(),
            pending_delete: None,
        }
    }

    /// Advances the sort cycle for a column, if it is sortable.
    pub fn toggle_sort(&mut self, column: usize) {
        let sortable = self
            .renderer
            .columns()
            .get(column)
            .is_some_and(|c| c.sortable);
        if sortable {
            self.sort.toggle(column);
        }
    }

    /// Sets the global free-text filter.
    pub fn set_global_filter(&mut self, query: impl Into<String>) {
        self.filter.set_global(query);
    }

    /// Sets a per-column filter; an empty query clears it.
    pub fn set_column_filter(&mut self, column: usize, query: impl Into<String>) {
        self.filter.set_column(column, query);
    }

    /// Flips a row's selection flag.
    pub fn toggle_row(&mut self, id: i64) {
        self.selection.toggle(id);
    }

    /// Selects or deselects every currently visible row.
    pub fn toggle_all(&mut self, records: &[RackRecord]) {
        let ids: Vec<i64> = self
            .visible(records)
            .iter()
            .map(|r| r.row_id())
            .collect();
        let select = !self.selection.all_selected(&ids);
        if select {
            self.selection.set_all(&ids, true);
        } else {
            self.selection.clear();
        }
    }

    /// Returns the selection state.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Emits the edit navigation event for a row.
    pub fn edit(&self, id: i64) -> RackTableEvent {
        RackTableEvent::EditRequested(id)
    }

    /// Stages a delete; nothing is removed until confirmed.
    pub fn request_delete(&mut self, id: i64) -> RackTableEvent {
        log::debug!("delete requested for rack {}, awaiting confirmation", id);
        self.pending_delete = Some(id);
        RackTableEvent::DeleteRequested(id)
    }

    /// Confirms the pending delete, yielding the id for the removal action.
    pub fn confirm_delete(&mut self) -> Option<RackTableEvent> {
        self.pending_delete
            .take()
            .map(RackTableEvent::DeleteConfirmed)
    }

    /// Dismisses the pending delete.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Returns the rack id awaiting delete confirmation, if any.
    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    /// Applies the active filters and sort to the given records.
    pub fn visible<'a>(&self, records: &'a [RackRecord]) -> Vec<&'a RackRecord> {
        let mut rows: Vec<&RackRecord> = records
            .iter()
            .filter(|r| self.filter.matches(*r, self.renderer.columns()))
            .collect();
        self.sort.apply(&mut rows, self.renderer.columns());
        rows
    }

    /// Renders the filtered, sorted records with selection.
    pub fn render(&self, records: &[RackRecord]) -> RenderedTable {
        self.renderer.render(
            self.visible(records).into_iter(),
            &self.sort,
            Some(&self.selection),
        )
    }
}

impl Default for RackTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rackwise_lib::model::RackType;

    use super::*;

    fn rack_type(id: i64, name: &str) -> RackType {
        RackType {
            id,
            name: name.into(),
            dim_x_mm: 1200,
            dim_y_mm: 800,
            dim_z_mm: 2200,
            floor_count: 4,
            max_load_kg: 800,
            feet_diameter_mm: 55,
        }
    }

    fn record(id: i64, rms: &str, type_id: i64, type_name: &str) -> RackRecord {
        RackRecord {
            rack_id: id,
            rms_rack_code: rms.into(),
            erp_rack_code: format!("ERP-{}", id),
            map_point_id: None,
            racktype_id: type_id,
            racktype_data: Some(rack_type(type_id, type_name)),
        }
    }

    #[test]
    fn test_schema_has_twelve_columns() {
        assert_eq!(rack_columns().len(), 12);
    }

    #[test]
    fn test_dotted_paths_resolve_through_embedded_type() {
        let rack = record(1, "RMS-1", 3, "pallet");
        assert_eq!(rack.field("racktype_data.name").as_deref(), Some("pallet"));
        assert_eq!(rack.field("racktype_data.dim_x_mm").as_deref(), Some("1200"));
        assert_eq!(rack.field("racktype_id").as_deref(), Some("3"));
    }

    #[test]
    fn test_missing_type_renders_empty_cells() {
        let mut rack = record(1, "RMS-1", 3, "pallet");
        rack.racktype_data = None;

        let table = RackTable::new().render(std::slice::from_ref(&rack));
        let cells = &table.rows[0].cells;
        // Type name and every dimension column go blank; the raw id stays.
        assert_eq!(cells[4], "");
        assert_eq!(cells[5], "3");
        assert_eq!(cells[6], "");
    }

    #[test]
    fn test_missing_map_point_renders_empty() {
        let rack = record(1, "RMS-1", 3, "pallet");
        let table = RackTable::new().render(std::slice::from_ref(&rack));
        assert_eq!(table.rows[0].cells[3], "");
    }

    #[test]
    fn test_filter_narrows_then_sort_orders() {
        let records = vec![
            record(1, "RMS-B", 1, "pallet"),
            record(2, "RMS-A", 1, "pallet"),
            record(3, "OTHER", 1, "pallet"),
        ];

        let mut table = RackTable::new();
        table.set_global_filter("rms");
        table.toggle_sort(1);

        let rendered = table.render(&records);
        assert_eq!(rendered.rows.len(), 2);
        assert_eq!(rendered.rows[0].cells[1], "RMS-A");
        assert_eq!(rendered.rows[1].cells[1], "RMS-B");
    }

    #[test]
    fn test_sort_by_id_is_numeric() {
        let records = vec![
            record(10, "a", 1, "t"),
            record(2, "b", 1, "t"),
            record(33, "c", 1, "t"),
        ];

        let mut table = RackTable::new();
        table.toggle_sort(0);
        let rendered = table.render(&records);
        let ids: Vec<i64> = rendered.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 10, 33]);
    }

    #[test]
    fn test_toggle_all_selects_only_visible_rows() {
        let records = vec![
            record(1, "RMS-1", 1, "t"),
            record(2, "RMS-2", 1, "t"),
            record(3, "OTHER", 1, "t"),
        ];

        let mut table = RackTable::new();
        table.set_global_filter("rms");
        table.toggle_all(&records);

        assert_eq!(table.selection().selected_ids(), vec![1, 2]);
        let rendered = table.render(&records);
        assert_eq!(rendered.all_selected, Some(true));

        table.toggle_all(&records);
        assert!(table.selection().is_empty());
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut table = RackTable::new();
        assert_eq!(table.confirm_delete(), None);

        assert_eq!(
            table.request_delete(7),
            RackTableEvent::DeleteRequested(7)
        );
        assert_eq!(table.pending_delete(), Some(7));

        assert_eq!(
            table.confirm_delete(),
            Some(RackTableEvent::DeleteConfirmed(7))
        );
        // Confirmation consumes the pending state.
        assert_eq!(table.pending_delete(), None);
        assert_eq!(table.confirm_delete(), None);
    }

    #[test]
    fn test_cancel_clears_pending_delete() {
        let mut table = RackTable::new();
        table.request_delete(7);
        table.cancel_delete();
        assert_eq!(table.confirm_delete(), None);
    }

    #[test]
    fn test_edit_event_keyed_by_row_id() {
        let table = RackTable::new();
        assert_eq!(table.edit(42), RackTableEvent::EditRequested(42));
    }
}
