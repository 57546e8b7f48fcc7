//! Core data types for weather station readings
//!
//! Plain value types shared by the query layer and its embedders,
//! plus the `ReadingSource` seam.

pub mod source;
pub mod types;

pub use source::*;
pub use types::*;
