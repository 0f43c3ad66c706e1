//! Terminal rendering of groups, thresholds and analysis reports.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use adkw_core::{AnalysisReport, Threshold};
use adkw_model::{EvaluationColumn, EvaluationRow, Locale, Tag};

/// Ad-group labels with their row counts, in report order.
pub fn groups_table(groups: &[(String, usize)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Ad group"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (idx, (label, rows)) in groups.iter().enumerate() {
        table.add_row(vec![
            dim_cell(idx + 1),
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(rows),
        ]);
    }
    table
}

pub fn thresholds_table(thresholds: &[Threshold]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tier"),
        header_cell("Metric"),
        header_cell("Bound"),
    ]);
    apply_table_style(&mut table);
    for threshold in thresholds {
        table.add_row(vec![
            tag_cell(threshold.tag, threshold.tag.as_str()),
            Cell::new(threshold.field),
            Cell::new(&threshold.bound),
        ]);
    }
    table
}

/// The evaluation table; keyword cells are colored by tier.
pub fn evaluation_table(report: &AnalysisReport) -> Table {
    let mut table = Table::new();
    table.set_header(
        report
            .table
            .headers
            .iter()
            .map(|header| header_cell(header))
            .collect::<Vec<_>>(),
    );
    apply_evaluation_table_style(&mut table);
    for (idx, column) in EvaluationColumn::ALL.iter().enumerate() {
        if column.is_numeric() {
            align_column(&mut table, idx, CellAlignment::Right);
        }
    }
    for row in &report.table.rows {
        table.add_row(evaluation_cells(row));
    }
    table
}

fn evaluation_cells(row: &EvaluationRow) -> Vec<Cell> {
    row.cells
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            if idx == 0 {
                tag_cell(row.tag, value)
            } else if row.tag == Tag::Error {
                dim_cell(value)
            } else {
                Cell::new(value)
            }
        })
        .collect()
}

/// One-line tier totals, e.g. `4 rows: 1 high, 1 low, 1 other, 1 error`.
pub fn counts_line(report: &AnalysisReport, locale: Locale) -> String {
    let parts: Vec<String> = Tag::ALL
        .iter()
        .map(|tag| format!("{} {}", report.counts.get(*tag), tag.label(locale)))
        .collect();
    format!("{} rows: {}", report.matched_rows, parts.join(", "))
}

pub fn print_report(report: &AnalysisReport, locale: Locale) {
    println!("{}", locale.high_heading());
    println!("{}", report.keywords.render_high(locale));
    println!();
    println!("{}", locale.low_heading());
    println!("{}", report.keywords.render_low(locale));
    println!();
    println!("{}", locale.table_heading());
    println!("{}", evaluation_table(report));
    println!("{}", counts_line(report, locale));
}

pub fn print_empty_selection(locale: Locale) {
    eprintln!("warning: {}", locale.empty_selection_warning());
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_evaluation_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(220);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn tag_cell(tag: Tag, value: &str) -> Cell {
    match tag {
        Tag::High => Cell::new(value)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Tag::Low => Cell::new(value)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Tag::Other => Cell::new(value),
        Tag::Error => dim_cell(value),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
