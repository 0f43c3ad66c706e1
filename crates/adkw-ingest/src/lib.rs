//! Report ingestion.
//!
//! Loads a search-term report export (CSV) through Polars and converts it
//! into positional [`adkw_model::Row`]s. Spreadsheet (xlsx) parsing happens
//! upstream; export the report sheet to CSV first.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use adkw_ingest::read_report;
//! use adkw_model::ColumnLayout;
//!
//! let report = read_report(Path::new("search_term_report.csv"))?;
//! for label in report.group_labels(&ColumnLayout::SEARCH_TERM_REPORT) {
//!     println!("{label}");
//! }
//! ```

mod error;
mod report;
mod values;

pub use error::{IngestError, Result};
pub use report::{
    MAX_REPORT_FILE_SIZE, ReportTable, check_file_size, check_file_size_with_limit, read_report,
    validate_encoding,
};
pub use values::{any_to_cell, frame_to_rows};
