//! Command stages shared by the `adkw` subcommands.
//!
//! 1. **Load**: read the report export and check it against the layout
//! 2. **Select**: turn `--group` / `--all-groups` into a [`GroupSelection`]
//! 3. **Export**: write an analysis as CSV or JSON to a file or stdout

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use adkw_core::{AnalysisReport, write_csv, write_json};
use adkw_ingest::{ReportTable, read_report};
use adkw_model::{Cell, ColumnLayout, Field, GroupSelection};

// ============================================================================
// Load
// ============================================================================

pub fn load_report(path: &Path, layout: &ColumnLayout) -> Result<ReportTable> {
    let start = Instant::now();
    let report = read_report(path).with_context(|| format!("load report {}", path.display()))?;
    report.validate_layout(layout);
    info!(
        path = %path.display(),
        rows = report.rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "report loaded"
    );
    Ok(report)
}

/// Ad-group labels with their row counts, in order of first appearance.
pub fn group_row_counts(report: &ReportTable, layout: &ColumnLayout) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for row in &report.rows {
        if let Some(label) = row.field(Field::GroupLabel, layout).and_then(Cell::as_text) {
            *counts.entry(label).or_insert(0) += 1;
        }
    }
    report
        .group_labels(layout)
        .into_iter()
        .map(|label| {
            let rows = counts.get(&label).copied().unwrap_or_default();
            (label, rows)
        })
        .collect()
}

// ============================================================================
// Select
// ============================================================================

/// Every label in the report when `all_groups` is set, otherwise `groups`.
pub fn select_groups(
    report: &ReportTable,
    layout: &ColumnLayout,
    groups: &[String],
    all_groups: bool,
) -> GroupSelection {
    if all_groups {
        report.group_labels(layout).into_iter().collect()
    } else {
        groups.iter().cloned().collect()
    }
}

// ============================================================================
// Export
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Write `analysis` to `output`, or to stdout when no path is given.
pub fn export(
    analysis: &AnalysisReport,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<()> {
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    match format {
        ExportFormat::Json => write_json(analysis, writer).context("write json")?,
        ExportFormat::Csv => write_csv(&analysis.table, writer).context("write csv")?,
    }
    if let Some(path) = output {
        info!(path = %path.display(), ?format, "output written");
    }
    Ok(())
}
