//! Core types for the scorecard dashboard.
//!
//! - `record`: one typed row of the scorecard spreadsheet
//! - `year`: the comparison rule for IMS year values
//! - `dataset`: CSV loading into an immutable, ordered table
//! - `filter`: selection of records by scorecard or by (year, status)

pub mod dataset;
pub mod error;
pub mod filter;
pub mod record;
pub mod year;

pub use dataset::Dataset;
pub use error::DatasetError;
pub use record::Record;
pub use year::{ImsYear, YearKey};

/// Column holding the scorecard name.
pub const SCORECARD_NAME_COLUMN: &str = "Scorecard name";
/// Column holding the IMS year.
pub const IMS_YEAR_COLUMN: &str = "IMS year";
/// Column holding the IMS status.
pub const IMS_STATUS_COLUMN: &str = "IMS status";
