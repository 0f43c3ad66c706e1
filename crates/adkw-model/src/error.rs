use thiserror::Error;

use crate::layout::Field;

/// Why a row could not be measured against the tier thresholds.
///
/// These never escape classification; they collapse into [`crate::Tag::Error`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassificationError {
    #[error("{field} missing at column {index}")]
    MissingField { field: Field, index: usize },
    #[error("{field} at column {index} is not numeric: '{value}'")]
    NonNumeric {
        field: Field,
        index: usize,
        value: String,
    },
    #[error("{field} at column {index} is not a finite number")]
    NotFinite { field: Field, index: usize },
}

pub type Result<T> = std::result::Result<T, ClassificationError>;
