//! Data model for ad keyword performance evaluation.
//!
//! Rows come from a search-term report whose columns are addressed by
//! position. [`ColumnLayout`] names those positions; everything else in the
//! workspace reads cells through it.

pub mod cell;
pub mod error;
pub mod evaluation;
pub mod layout;
pub mod locale;
pub mod selection;
pub mod tag;

pub use cell::{Cell, Row, format_numeric, parse_numeric};
pub use error::{ClassificationError, Result};
pub use evaluation::{EvaluationColumn, EvaluationRow, EvaluationTable, KeywordLists, TagCounts};
pub use layout::{ColumnLayout, Field};
pub use locale::Locale;
pub use selection::GroupSelection;
pub use tag::Tag;
