//! Rack records: wire format and the enriched display form

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use super::RackType;

/// External-field key carrying the RMS rack code.
pub const RMS_CODE_KEY: &str = "RMSDummy";
/// External-field key carrying the ERP rack code.
pub const ERP_CODE_KEY: &str = "ERPDummy";

/// A rack record as returned by the backend.
///
/// The `external` map holds the server-configurable dynamic fields; its key
/// set is not known at compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRack {
    /// Unique identifier of the rack.
    pub id: i64,
    /// Foreign key to the rack type.
    pub rack_type_id: i64,
    /// Map point locating the rack in the facility, when the backend has one.
    #[serde(default)]
    pub map_point_id: Option<i64>,
    /// Dynamic external fields (string key to string value).
    #[serde(default)]
    pub external: HashMap<String, String>,
}

impl RawRack {
    /// Returns the external-field value for `key`, if present.
    pub fn external_field(&self, key: &str) -> Option<&str> {
        self.external.get(key).map(|s| s.as_str())
    }
}

/// A rack record enriched with its type metadata, ready for display.
///
/// `racktype_data` is a denormalized copy joined against the type list at
/// fetch time. Nothing enforces the reference afterwards; if types change
/// between fetch and use the embedded copy can go stale.
#[derive(Debug, Clone, PartialEq)]
pub struct RackRecord {
    /// Unique identifier of the rack.
    pub rack_id: i64,
    /// RMS code from the external fields.
    pub rms_rack_code: String,
    /// ERP code from the external fields.
    pub erp_rack_code: String,
    /// Map point, if the backend supplied one.
    pub map_point_id: Option<i64>,
    /// Foreign key to the rack type.
    pub racktype_id: i64,
    /// Embedded copy of the referenced type; `None` when the reference
    /// dangles.
    pub racktype_data: Option<RackType>,
}

impl RackRecord {
    /// Builds the enriched record by joining a raw rack against the type
    /// list.
    ///
    /// Missing external codes become empty strings and a dangling type
    /// reference leaves `racktype_data` as `None`; a single bad record never
    /// fails a whole page.
    pub fn from_raw(raw: &RawRack, types: &[RackType]) -> Self {
        Self {
            rack_id: raw.id,
            rms_rack_code: raw.external_field(RMS_CODE_KEY).unwrap_or_default().to_string(),
            erp_rack_code: raw.external_field(ERP_CODE_KEY).unwrap_or_default().to_string(),
            map_point_id: raw.map_point_id,
            racktype_id: raw.rack_type_id,
            racktype_data: RackType::find(raw.rack_type_id, types).cloned(),
        }
    }
}
