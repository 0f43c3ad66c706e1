//! Keyword tier classification and evaluation table formatting.
//!
//! The pipeline is a single pass over the selected report rows:
//!
//! 1. **Filter**: keep rows whose ad-group label is in the [`GroupSelection`]
//! 2. **Classify**: tag each row [`Tag::High`], [`Tag::Low`], [`Tag::Other`]
//!    or [`Tag::Error`]
//! 3. **Split**: collect the keywords of high and low rows
//! 4. **Format**: project, sort and format every selected row into an
//!    [`EvaluationTable`]
//!
//! [`GroupSelection`]: adkw_model::GroupSelection
//! [`Tag::High`]: adkw_model::Tag::High
//! [`Tag::Low`]: adkw_model::Tag::Low
//! [`Tag::Other`]: adkw_model::Tag::Other
//! [`Tag::Error`]: adkw_model::Tag::Error
//! [`EvaluationTable`]: adkw_model::EvaluationTable

pub mod analysis;
pub mod classify;
pub mod export;
pub mod format;
pub mod table;

pub use analysis::{AnalysisOptions, AnalysisOutcome, AnalysisReport, analyze, tag_rows};
pub use classify::{Threshold, classify, evaluate, thresholds};
pub use export::{OutputError, write_csv, write_json};
pub use format::format_cell;
pub use table::{TaggedRow, build_evaluation_table, keyword_lists};
