//! Rack type template

use serde::Deserialize;
use serde::Serialize;

/// A rack type: the physical template shared by many racks.
///
/// Dimensions are in millimeters, load capacity in kilograms. Field names
/// mirror the backend wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RackType {
    /// Unique identifier of the type.
    pub id: i64,
    /// Display name of the type.
    pub name: String,
    /// Width in millimeters.
    pub dim_x_mm: u32,
    /// Depth in millimeters.
    pub dim_y_mm: u32,
    /// Height in millimeters.
    pub dim_z_mm: u32,
    /// Number of shelf floors.
    pub floor_count: u32,
    /// Maximum load in kilograms.
    pub max_load_kg: u32,
    /// Feet diameter in millimeters.
    pub feet_diameter_mm: u32,
}

impl RackType {
    /// Finds the type with the given id in a type list.
    ///
    /// Linear scan; type catalogs are small, so no index is kept.
    pub fn find(id: i64, types: &[RackType]) -> Option<&RackType> {
        types.iter().find(|t| t.id == id)
    }
}
