//! Per-column display formatting for the evaluation table.
//!
//! Null, non-numeric and non-finite cells render with the column's zero form.

use adkw_model::{Cell, EvaluationColumn, Locale};

fn number(cell: Option<&Cell>) -> Option<f64> {
    cell.and_then(Cell::as_f64).filter(|value| value.is_finite())
}

/// Fraction as a percentage with one decimal: `0.153` → `"15.3%"`.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => "0.0%".to_string(),
    }
}

/// Fixed-point with one decimal: `12.34` → `"12.3"`.
pub fn format_fixed(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "0.0".to_string(),
    }
}

/// Fraction as a whole percentage, rounded: `0.07` → `"7%"`.
pub fn format_roas(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}%", (v * 100.0).round() as i64),
        None => "0%".to_string(),
    }
}

/// Count truncated toward zero: `1500.9` → `"1500"`.
pub fn format_count(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v.trunc() as i64),
        None => "0".to_string(),
    }
}

/// Localized match-type label; unknown codes pass through unchanged.
pub fn format_match_type(cell: Option<&Cell>, locale: Locale) -> String {
    let Some(code) = cell.and_then(Cell::as_text) else {
        return String::new();
    };
    match code.to_uppercase().as_str() {
        "EXACT" => locale.exact_match().to_string(),
        "PHRASE" => locale.phrase_match().to_string(),
        "BROAD" => locale.broad_match().to_string(),
        _ => code,
    }
}

fn format_text(cell: Option<&Cell>) -> String {
    cell.and_then(Cell::as_text).unwrap_or_default()
}

/// Format the source cell of `column` for display.
///
/// `cell` is `None` when the row is too narrow to have the column.
pub fn format_cell(column: EvaluationColumn, cell: Option<&Cell>, locale: Locale) -> String {
    match column {
        EvaluationColumn::Keyword | EvaluationColumn::Targeting => format_text(cell),
        EvaluationColumn::MatchType => format_match_type(cell, locale),
        EvaluationColumn::Impressions | EvaluationColumn::Clicks | EvaluationColumn::Orders => {
            format_count(number(cell))
        }
        EvaluationColumn::Ctr | EvaluationColumn::Acos | EvaluationColumn::Cvr => {
            format_percent(number(cell))
        }
        EvaluationColumn::Spend | EvaluationColumn::AvgCpc | EvaluationColumn::Revenue => {
            format_fixed(number(cell))
        }
        EvaluationColumn::Roas => format_roas(number(cell)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(column: EvaluationColumn, cell: Cell) -> String {
        format_cell(column, Some(&cell), Locale::En)
    }

    #[test]
    fn test_percent_columns() {
        assert_eq!(fmt(EvaluationColumn::Ctr, Cell::Number(1.234)), "123.4%");
        assert_eq!(fmt(EvaluationColumn::Acos, Cell::Number(0.15)), "15.0%");
        assert_eq!(fmt(EvaluationColumn::Acos, Cell::Number(0.153)), "15.3%");
        assert_eq!(fmt(EvaluationColumn::Cvr, Cell::Number(0.1)), "10.0%");
        assert_eq!(fmt(EvaluationColumn::Ctr, Cell::Null), "0.0%");
    }

    #[test]
    fn test_fixed_columns() {
        assert_eq!(fmt(EvaluationColumn::Spend, Cell::Number(12.34)), "12.3");
        assert_eq!(fmt(EvaluationColumn::AvgCpc, Cell::Number(40.0)), "40.0");
        assert_eq!(fmt(EvaluationColumn::Revenue, Cell::Null), "0.0");
    }

    #[test]
    fn test_roas_rounds() {
        assert_eq!(fmt(EvaluationColumn::Roas, Cell::Number(0.07)), "7%");
        assert_eq!(fmt(EvaluationColumn::Roas, Cell::Number(0.42)), "42%");
        assert_eq!(fmt(EvaluationColumn::Roas, Cell::Number(0.29)), "29%");
        assert_eq!(fmt(EvaluationColumn::Roas, Cell::Number(0.016)), "2%");
        assert_eq!(fmt(EvaluationColumn::Roas, Cell::Null), "0%");
    }

    #[test]
    fn test_counts_truncate() {
        assert_eq!(fmt(EvaluationColumn::Impressions, Cell::Number(1500.0)), "1500");
        assert_eq!(fmt(EvaluationColumn::Clicks, Cell::Number(9.9)), "9");
        assert_eq!(fmt(EvaluationColumn::Orders, Cell::Number(-2.7)), "-2");
        assert_eq!(fmt(EvaluationColumn::Orders, Cell::Null), "0");
        assert_eq!(fmt(EvaluationColumn::Clicks, Cell::Number(f64::NAN)), "0");
    }

    #[test]
    fn test_match_type() {
        assert_eq!(fmt(EvaluationColumn::MatchType, Cell::text("EXACT")), "exact");
        assert_eq!(fmt(EvaluationColumn::MatchType, Cell::text("Phrase")), "phrase");
        assert_eq!(fmt(EvaluationColumn::MatchType, Cell::text("broad")), "broad");
        assert_eq!(fmt(EvaluationColumn::MatchType, Cell::text("UNKNOWN")), "UNKNOWN");
        assert_eq!(fmt(EvaluationColumn::MatchType, Cell::Null), "");
        assert_eq!(
            format_match_type(Some(&Cell::text("exact")), Locale::Ja),
            "完全一致"
        );
    }

    #[test]
    fn test_text_and_missing_cells() {
        assert_eq!(
            fmt(EvaluationColumn::Keyword, Cell::text("running shoes")),
            "running shoes"
        );
        assert_eq!(
            format_cell(EvaluationColumn::Targeting, None, Locale::En),
            ""
        );
        assert_eq!(
            format_cell(EvaluationColumn::Spend, None, Locale::En),
            "0.0"
        );
    }

    #[test]
    fn test_infinite_values_use_zero_form() {
        for value in [Cell::Number(f64::INFINITY), Cell::text("inf"), Cell::text("-infinity")] {
            assert_eq!(fmt(EvaluationColumn::Impressions, value.clone()), "0");
            assert_eq!(fmt(EvaluationColumn::Roas, value.clone()), "0%");
            assert_eq!(fmt(EvaluationColumn::Ctr, value.clone()), "0.0%");
            assert_eq!(fmt(EvaluationColumn::Spend, value), "0.0");
        }
    }

    #[test]
    fn test_non_numeric_metric_uses_zero_form() {
        assert_eq!(fmt(EvaluationColumn::Spend, Cell::text("n/a")), "0.0");
        assert_eq!(fmt(EvaluationColumn::Spend, Cell::text("12.34")), "12.3");
    }
}
