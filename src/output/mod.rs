//! Output module: dated CSV export
//!
//! Records are accumulated in memory for the whole run and written once at
//! the end; at catalog scale (tens to low hundreds of products) a streaming
//! writer is not worth its complexity.

mod csv_export;

pub use csv_export::{dated_filename, export_records, write_records};
