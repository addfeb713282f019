//! Data model types

mod field_source;
mod form;
mod rack;
mod rack_type;

pub use field_source::*;
pub use form::*;
pub use rack::*;
pub use rack_type::*;
