//! Evaluation output: the formatted table, keyword lists and tag counts.

use serde::{Deserialize, Serialize};

use crate::layout::Field;
use crate::locale::Locale;
use crate::tag::Tag;

/// Columns of the evaluation table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationColumn {
    Keyword,
    Targeting,
    MatchType,
    Impressions,
    Clicks,
    Ctr,
    Spend,
    AvgCpc,
    Orders,
    Revenue,
    Acos,
    Roas,
    Cvr,
}

impl EvaluationColumn {
    pub const ALL: [EvaluationColumn; 13] = [
        EvaluationColumn::Keyword,
        EvaluationColumn::Targeting,
        EvaluationColumn::MatchType,
        EvaluationColumn::Impressions,
        EvaluationColumn::Clicks,
        EvaluationColumn::Ctr,
        EvaluationColumn::Spend,
        EvaluationColumn::AvgCpc,
        EvaluationColumn::Orders,
        EvaluationColumn::Revenue,
        EvaluationColumn::Acos,
        EvaluationColumn::Roas,
        EvaluationColumn::Cvr,
    ];

    /// Report field projected into this column.
    pub fn source(self) -> Field {
        match self {
            EvaluationColumn::Keyword => Field::SearchTerm,
            EvaluationColumn::Targeting => Field::Targeting,
            EvaluationColumn::MatchType => Field::MatchType,
            EvaluationColumn::Impressions => Field::Impressions,
            EvaluationColumn::Clicks => Field::Clicks,
            EvaluationColumn::Ctr => Field::Ctr,
            EvaluationColumn::Spend => Field::Spend,
            EvaluationColumn::AvgCpc => Field::AvgCpc,
            EvaluationColumn::Orders => Field::Orders,
            EvaluationColumn::Revenue => Field::Revenue,
            EvaluationColumn::Acos => Field::Acos,
            EvaluationColumn::Roas => Field::Roas,
            EvaluationColumn::Cvr => Field::Cvr,
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                EvaluationColumn::Keyword => "Keyword",
                EvaluationColumn::Targeting => "Targeting",
                EvaluationColumn::MatchType => "MatchType",
                EvaluationColumn::Impressions => "Impressions",
                EvaluationColumn::Clicks => "Clicks",
                EvaluationColumn::Ctr => "CTR",
                EvaluationColumn::Spend => "Spend",
                EvaluationColumn::AvgCpc => "AvgCPC",
                EvaluationColumn::Orders => "Orders",
                EvaluationColumn::Revenue => "Revenue",
                EvaluationColumn::Acos => "ACOS",
                EvaluationColumn::Roas => "ROAS",
                EvaluationColumn::Cvr => "CVR",
            },
            Locale::Ja => match self {
                EvaluationColumn::Keyword => "カスタマーの検索キーワード",
                EvaluationColumn::Targeting => "ターゲティング",
                EvaluationColumn::MatchType => "タイプ",
                EvaluationColumn::Impressions => "インプレッション",
                EvaluationColumn::Clicks => "クリック数",
                EvaluationColumn::Ctr => "クリック率(CTR)",
                EvaluationColumn::Spend => "広告費",
                EvaluationColumn::AvgCpc => "平均クリック単価",
                EvaluationColumn::Orders => "注文数",
                EvaluationColumn::Revenue => "売上",
                EvaluationColumn::Acos => "ACOS",
                EvaluationColumn::Roas => "ROAS",
                EvaluationColumn::Cvr => "コンバージョン率(CVR)",
            },
        }
    }

    /// Numeric columns are right-aligned when rendered.
    pub fn is_numeric(self) -> bool {
        !matches!(
            self,
            EvaluationColumn::Keyword | EvaluationColumn::Targeting | EvaluationColumn::MatchType
        )
    }
}

/// One formatted row; `cells` follows [`EvaluationColumn::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRow {
    pub tag: Tag,
    pub cells: Vec<String>,
}

impl EvaluationRow {
    pub fn cell(&self, column: EvaluationColumn) -> &str {
        EvaluationColumn::ALL
            .iter()
            .position(|c| *c == column)
            .and_then(|idx| self.cells.get(idx))
            .map_or("", String::as_str)
    }
}

/// Formatted projection of the selected rows, sorted by impressions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationTable {
    pub headers: Vec<String>,
    pub rows: Vec<EvaluationRow>,
}

impl EvaluationTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Keywords of the high and low tiers, in report order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordLists {
    pub high: Vec<String>,
    pub low: Vec<String>,
}

impl KeywordLists {
    pub fn render_high(&self, locale: Locale) -> String {
        render_list(&self.high, locale)
    }

    pub fn render_low(&self, locale: Locale) -> String {
        render_list(&self.low, locale)
    }
}

fn render_list(keywords: &[String], locale: Locale) -> String {
    if keywords.is_empty() {
        locale.empty_marker().to_string()
    } else {
        keywords.join(", ")
    }
}

/// Per-tag row totals for one analysis run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCounts {
    pub high: usize,
    pub low: usize,
    pub other: usize,
    pub error: usize,
}

impl TagCounts {
    pub fn record(&mut self, tag: Tag) {
        match tag {
            Tag::High => self.high += 1,
            Tag::Low => self.low += 1,
            Tag::Other => self.other += 1,
            Tag::Error => self.error += 1,
        }
    }

    pub fn get(&self, tag: Tag) -> usize {
        match tag {
            Tag::High => self.high,
            Tag::Low => self.low,
            Tag::Other => self.other,
            Tag::Error => self.error,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.low + self.other + self.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_order() {
        let labels: Vec<&str> = EvaluationColumn::ALL
            .iter()
            .map(|c| c.label(Locale::En))
            .collect();
        assert_eq!(
            labels,
            vec![
                "Keyword",
                "Targeting",
                "MatchType",
                "Impressions",
                "Clicks",
                "CTR",
                "Spend",
                "AvgCPC",
                "Orders",
                "Revenue",
                "ACOS",
                "ROAS",
                "CVR"
            ]
        );
    }

    #[test]
    fn test_empty_lists_render_marker() {
        let lists = KeywordLists::default();
        assert_eq!(lists.render_high(Locale::En), "none");
        assert_eq!(lists.render_low(Locale::Ja), "なし");
    }

    #[test]
    fn test_lists_join_with_comma_space() {
        let lists = KeywordLists {
            high: vec!["running shoes".into(), "trail shoes".into()],
            low: vec!["sandals".into()],
        };
        assert_eq!(lists.render_high(Locale::En), "running shoes, trail shoes");
        assert_eq!(lists.render_low(Locale::En), "sandals");
    }

    #[test]
    fn test_row_cell_lookup() {
        let row = EvaluationRow {
            tag: Tag::Other,
            cells: (0..13).map(|i| i.to_string()).collect(),
        };
        assert_eq!(row.cell(EvaluationColumn::Keyword), "0");
        assert_eq!(row.cell(EvaluationColumn::Impressions), "3");
        assert_eq!(row.cell(EvaluationColumn::Cvr), "12");
    }
}
