//! Evaluation table construction and keyword list derivation.

use std::cmp::Ordering;

use adkw_model::{
    Cell, ColumnLayout, EvaluationColumn, EvaluationRow, EvaluationTable, Field, KeywordLists,
    Locale, Row, Tag,
};

use crate::format::format_cell;

/// A report row with the tag assigned to it in this run.
#[derive(Debug, Clone, Copy)]
pub struct TaggedRow<'a> {
    pub row: &'a Row,
    pub tag: Tag,
}

fn impressions(row: &Row, layout: &ColumnLayout) -> Option<f64> {
    row.field(Field::Impressions, layout)
        .and_then(Cell::as_f64)
        .filter(|value| value.is_finite())
}

/// Descending by impressions; rows without a finite number sort last.
fn by_impressions_desc(left: Option<f64>, right: Option<f64>) -> Ordering {
    match (left, right) {
        (Some(l), Some(r)) => r.total_cmp(&l),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Project, sort and format `rows` into the evaluation table.
///
/// Every row is included regardless of its tag. The sort is stable, so
/// rows with equal impressions keep their report order.
pub fn build_evaluation_table(
    rows: &[TaggedRow<'_>],
    layout: &ColumnLayout,
    locale: Locale,
) -> EvaluationTable {
    let mut ordered: Vec<(Option<f64>, &TaggedRow<'_>)> = rows
        .iter()
        .map(|tagged| (impressions(tagged.row, layout), tagged))
        .collect();
    ordered.sort_by(|a, b| by_impressions_desc(a.0, b.0));

    let headers = EvaluationColumn::ALL
        .iter()
        .map(|column| column.label(locale).to_string())
        .collect();
    let rows = ordered
        .into_iter()
        .map(|(_, tagged)| EvaluationRow {
            tag: tagged.tag,
            cells: EvaluationColumn::ALL
                .iter()
                .map(|column| {
                    format_cell(*column, tagged.row.field(column.source(), layout), locale)
                })
                .collect(),
        })
        .collect();
    EvaluationTable { headers, rows }
}

/// Keywords of high and low rows, in report order.
///
/// Other and error rows never contribute, nor do rows without a search term.
pub fn keyword_lists(rows: &[TaggedRow<'_>], layout: &ColumnLayout) -> KeywordLists {
    let mut lists = KeywordLists::default();
    for tagged in rows {
        let target = match tagged.tag {
            Tag::High => &mut lists.high,
            Tag::Low => &mut lists.low,
            Tag::Other | Tag::Error => continue,
        };
        if let Some(keyword) = tagged
            .row
            .field(Field::SearchTerm, layout)
            .and_then(Cell::as_text)
        {
            target.push(keyword);
        }
    }
    lists
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(keyword: &str, impressions: Cell) -> Row {
        let layout = ColumnLayout::SEARCH_TERM_REPORT;
        let mut row = Row::new(vec![Cell::Null; layout.min_width()]);
        row.set(layout.search_term, Cell::text(keyword));
        row.set(layout.impressions, impressions);
        row
    }

    #[test]
    fn test_sort_nulls_last_and_stable() {
        let layout = ColumnLayout::SEARCH_TERM_REPORT;
        let source = [
            row("a", Cell::Null),
            row("b", Cell::Number(10.0)),
            row("c", Cell::Number(50.0)),
            row("d", Cell::Number(10.0)),
            row("e", Cell::text("oops")),
        ];
        let tagged: Vec<TaggedRow<'_>> = source
            .iter()
            .map(|row| TaggedRow {
                row,
                tag: Tag::Other,
            })
            .collect();
        let table = build_evaluation_table(&tagged, &layout, Locale::En);
        let keywords: Vec<&str> = table
            .rows
            .iter()
            .map(|r| r.cell(EvaluationColumn::Keyword))
            .collect();
        assert_eq!(keywords, vec!["c", "b", "d", "a", "e"]);
    }

    #[test]
    fn test_keyword_lists_skip_other_and_error() {
        let layout = ColumnLayout::SEARCH_TERM_REPORT;
        let source = [
            row("hi", Cell::Null),
            row("lo", Cell::Null),
            row("meh", Cell::Null),
            row("bad", Cell::Null),
        ];
        let tags = [Tag::High, Tag::Low, Tag::Other, Tag::Error];
        let tagged: Vec<TaggedRow<'_>> = source
            .iter()
            .zip(tags)
            .map(|(row, tag)| TaggedRow { row, tag })
            .collect();
        let lists = keyword_lists(&tagged, &layout);
        assert_eq!(lists.high, vec!["hi"]);
        assert_eq!(lists.low, vec!["lo"]);
    }

    #[test]
    fn test_infinite_impressions_sort_last() {
        let layout = ColumnLayout::SEARCH_TERM_REPORT;
        let source = [
            row("inf", Cell::Number(f64::INFINITY)),
            row("small", Cell::Number(5.0)),
            row("text inf", Cell::text("inf")),
            row("large", Cell::Number(500.0)),
        ];
        let tagged: Vec<TaggedRow<'_>> = source
            .iter()
            .map(|row| TaggedRow {
                row,
                tag: Tag::Other,
            })
            .collect();
        let table = build_evaluation_table(&tagged, &layout, Locale::En);
        let keywords: Vec<&str> = table
            .rows
            .iter()
            .map(|r| r.cell(EvaluationColumn::Keyword))
            .collect();
        assert_eq!(keywords, vec!["large", "small", "inf", "text inf"]);
        assert_eq!(table.rows[2].cell(EvaluationColumn::Impressions), "0");
    }

    #[test]
    fn test_keyword_lists_skip_missing_search_terms() {
        let layout = ColumnLayout::SEARCH_TERM_REPORT;
        let source = [row("", Cell::Null), row("sandals", Cell::Null)];
        let tagged: Vec<TaggedRow<'_>> = source
            .iter()
            .map(|row| TaggedRow { row, tag: Tag::Low })
            .collect();
        let lists = keyword_lists(&tagged, &layout);
        assert_eq!(lists.low, vec!["sandals"]);
        assert_eq!(lists.render_low(Locale::En), "sandals");
        assert!(lists.high.is_empty());
    }

    #[test]
    fn test_headers_follow_locale() {
        let table = build_evaluation_table(&[], &ColumnLayout::default(), Locale::Ja);
        assert_eq!(table.headers[0], "カスタマーの検索キーワード");
        assert_eq!(table.headers.len(), 13);
        assert!(table.is_empty());
    }
}
