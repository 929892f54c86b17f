//! Curriculum catalog: the in-memory record store and its loader.
//!
//! # Architecture
//!
//! - **RecordStore**: immutable snapshot of catalog records plus the
//!   field schema, shared read-only for the process lifetime
//! - **loader**: parses JSON row exports into records
//! - **FieldClass**: vocabulary / skill / other classification of
//!   field names, driving weighting and mode eligibility

mod fields;
mod loader;
mod store;

pub use fields::FieldClass;
pub use store::{CatalogInfo, RecordStore};
