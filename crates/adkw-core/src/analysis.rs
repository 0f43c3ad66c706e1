//! One analysis run over a report snapshot.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use adkw_model::{
    ColumnLayout, EvaluationTable, Field, GroupSelection, KeywordLists, Locale, Row, TagCounts,
};

use crate::classify::classify;
use crate::table::{TaggedRow, build_evaluation_table, keyword_lists};

/// Options for an analysis run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub layout: ColumnLayout,
    pub locale: Locale,
}

impl AnalysisOptions {
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: ColumnLayout) -> Self {
        self.layout = layout;
        self
    }
}

/// Everything a run produces for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub selection: Vec<String>,
    /// Rows whose group label is in the selection.
    pub matched_rows: usize,
    pub counts: TagCounts,
    pub keywords: KeywordLists,
    pub table: EvaluationTable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// No ad group was selected; nothing was analyzed.
    EmptySelection,
    Report(AnalysisReport),
}

/// Tag every row in `rows`.
pub fn tag_rows<'a>(
    rows: impl IntoIterator<Item = &'a Row>,
    layout: &ColumnLayout,
) -> Vec<TaggedRow<'a>> {
    rows.into_iter()
        .map(|row| TaggedRow {
            row,
            tag: classify(row, layout),
        })
        .collect()
}

/// Filter `rows` by `selection`, classify them and build the outputs.
///
/// Each call is independent: the same rows and selection always produce
/// the same outcome.
pub fn analyze(
    rows: &[Row],
    selection: &GroupSelection,
    options: &AnalysisOptions,
) -> AnalysisOutcome {
    if selection.is_empty() {
        warn!("analysis requested without an ad group selection");
        return AnalysisOutcome::EmptySelection;
    }
    let span = info_span!("analyze", groups = selection.len());
    let _guard = span.enter();
    let start = Instant::now();
    let layout = &options.layout;

    let selected = rows.iter().filter(|row| {
        row.field(Field::GroupLabel, layout)
            .is_some_and(|cell| selection.contains(cell))
    });
    let tagged = tag_rows(selected, layout);

    let mut counts = TagCounts::default();
    for row in &tagged {
        counts.record(row.tag);
    }
    let keywords = keyword_lists(&tagged, layout);
    let table = build_evaluation_table(&tagged, layout, options.locale);

    info!(
        rows = rows.len(),
        matched = tagged.len(),
        high = counts.high,
        low = counts.low,
        other = counts.other,
        error = counts.error,
        duration_ms = start.elapsed().as_millis(),
        "analysis complete"
    );

    AnalysisOutcome::Report(AnalysisReport {
        selection: selection.labels().map(str::to_string).collect(),
        matched_rows: tagged.len(),
        counts,
        keywords,
        table,
    })
}
