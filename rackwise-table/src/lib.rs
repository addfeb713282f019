//! Generic tabular rendering for rack management front ends
//!
//! A presentation-logic layer: column descriptors resolve row records into
//! display text, selection and sort and filter state live in small owned
//! types, and the rack table view binds it all to the twelve-column rack
//! schema. No widget toolkit is assumed; callers render the resolved cells
//! however they like.

pub mod column;
pub mod filter;
pub mod racks;
pub mod selection;
pub mod sort;
pub mod table;

pub use column::*;
pub use filter::*;
pub use racks::*;
pub use selection::*;
pub use sort::*;
pub use table::*;
