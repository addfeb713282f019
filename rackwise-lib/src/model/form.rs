//! Form input and create/update payload shaping

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::error::FormError;

/// The form key carrying the rack type selection.
pub const TYPE_SELECTOR_KEY: &str = "typeID";

/// Raw form input for creating or editing a rack.
///
/// The form is a flat key/value map: the type-selector entry plus however
/// many dynamic external fields the server has configured. Keys are
/// validated for uniqueness only; the field set is never fixed at compile
/// time.
///
/// # Example
///
/// ```
/// use rackwise_lib::model::RackForm;
///
/// let form = RackForm::from_entries([
///     ("typeID", "2"),
///     ("RMSDummy", "RMS-0042"),
/// ])
/// .unwrap();
///
/// let payload = form.payload().unwrap();
/// assert_eq!(payload.rack_type_id, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RackForm {
    values: BTreeMap<String, String>,
}

impl RackForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a form from key/value entries.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::DuplicateKey`] if a key appears more than once.
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Result<Self, FormError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut values = BTreeMap::new();
        for (key, value) in entries {
            let key = key.into();
            if values.contains_key(&key) {
                return Err(FormError::duplicate_key(key));
            }
            values.insert(key, value.into());
        }
        Ok(Self { values })
    }

    /// Sets a field value (builder pattern). Overwrites an existing key.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Returns the field value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    /// Parses the selected rack type id from the type-selector entry.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingTypeSelector`] when the entry is absent
    /// and [`FormError::InvalidTypeId`] when it does not parse as an integer.
    pub fn type_id(&self) -> Result<i64, FormError> {
        let raw = self
            .values
            .get(TYPE_SELECTOR_KEY)
            .ok_or(FormError::MissingTypeSelector)?;
        raw.parse()
            .map_err(|_| FormError::invalid_type_id(raw.clone()))
    }

    /// Derives the external-fields payload: every entry except the
    /// type-selector entry.
    ///
    /// The exclusion is keyed on the selector key alone. A field that merely
    /// shares the selected type id's value stays in the payload.
    pub fn external_fields(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .filter(|(key, _)| key.as_str() != TYPE_SELECTOR_KEY)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Shapes the form into the create/update request payload.
    pub fn payload(&self) -> Result<RackPayload, FormError> {
        Ok(RackPayload {
            rack_type_id: self.type_id()?,
            external: self.external_fields(),
        })
    }
}

/// Request body for rack create and update operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RackPayload {
    /// The selected rack type.
    pub rack_type_id: i64,
    /// The dynamic external fields.
    pub external: BTreeMap<String, String>,
}
