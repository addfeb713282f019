//! Form validation error types

/// Errors produced while validating or shaping form input.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FormError {
    /// The same key appeared more than once in the form input.
    #[error("Duplicate form field '{key}'")]
    DuplicateKey {
        /// The offending key.
        key: String,
    },

    /// The type-selector entry is missing from the form input.
    #[error("Form is missing the rack type selection")]
    MissingTypeSelector,

    /// The type-selector value is not a valid rack type id.
    #[error("'{value}' is not a valid rack type id")]
    InvalidTypeId {
        /// The raw selector value.
        value: String,
    },
}

impl FormError {
    /// Creates a duplicate-key error.
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }

    /// Creates an invalid-type-id error.
    pub fn invalid_type_id(value: impl Into<String>) -> Self {
        Self::InvalidTypeId {
            value: value.into(),
        }
    }
}
