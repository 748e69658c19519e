//! Data model for the Shalom archive catalog.
//!
//! Holds the record type and the field-level parsing rules shared by the
//! table parser and the catalog store. This crate performs no I/O.

pub mod record;
pub mod visual_type;

pub use record::{Record, parse_year, split_tags};
pub use visual_type::{VisualType, VisualTypeParseError};
