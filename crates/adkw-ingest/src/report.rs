//! Report file reading.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;
use tracing::{debug, warn};

use adkw_model::{Cell, ColumnLayout, Field, Row};

use crate::error::{IngestError, Result};
use crate::values::frame_to_rows;

/// Maximum file size for report loading (200 MB).
pub const MAX_REPORT_FILE_SIZE: u64 = 200 * 1024 * 1024;

/// A loaded report: header names plus positional rows.
#[derive(Debug, Clone, Default)]
pub struct ReportTable {
    /// Header names, kept for diagnostics only.
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl ReportTable {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Warns when the report cannot satisfy `layout`.
    ///
    /// Narrow reports still load; rows missing a metric classify as errors.
    /// Returns true when the width is sufficient.
    pub fn validate_layout(&self, layout: &ColumnLayout) -> bool {
        let required = layout.min_width();
        if self.width() < required {
            warn!(
                columns = self.width(),
                required, "report is narrower than the search-term layout"
            );
            return false;
        }
        for field in [Field::GroupLabel, Field::SearchTerm, Field::Impressions] {
            if let Some(header) = self.headers.get(layout.index(field)) {
                debug!(%field, header = %header, "layout column");
            }
        }
        true
    }

    /// Distinct ad-group labels in order of first appearance.
    pub fn group_labels(&self, layout: &ColumnLayout) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut labels = Vec::new();
        for row in &self.rows {
            let Some(label) = row
                .field(Field::GroupLabel, layout)
                .and_then(Cell::as_text)
            else {
                continue;
            };
            if seen.insert(label.clone()) {
                labels.push(label);
            }
        }
        labels
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_REPORT_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Rejects UTF-16 exports, which spreadsheet tools produce for "Unicode text".
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads a report export into positional rows.
///
/// The first line is the header row. Column types are inferred over the
/// whole file so a late text value does not break numeric parsing.
pub fn read_report(path: &Path) -> Result<ReportTable> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.height() == 0 {
        return Err(IngestError::EmptyReport {
            path: path.to_path_buf(),
        });
    }

    let headers: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.trim_start_matches('\u{feff}').to_string())
        .collect();
    let rows = frame_to_rows(&df)?;
    debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = headers.len(),
        "report loaded"
    );
    Ok(ReportTable::new(headers, rows))
}

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}
