//! Positional column contract of the search-term report.
//!
//! The report is addressed by column position, not by header name. The
//! positions below must match the export exactly; a shifted export silently
//! misreads every metric.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic fields read from a report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    GroupLabel,
    Targeting,
    MatchType,
    SearchTerm,
    Impressions,
    Clicks,
    Ctr,
    AvgCpc,
    Spend,
    Revenue,
    Acos,
    Roas,
    Orders,
    Cvr,
}

impl Field {
    pub const ALL: [Field; 14] = [
        Field::GroupLabel,
        Field::Targeting,
        Field::MatchType,
        Field::SearchTerm,
        Field::Impressions,
        Field::Clicks,
        Field::Ctr,
        Field::AvgCpc,
        Field::Spend,
        Field::Revenue,
        Field::Acos,
        Field::Roas,
        Field::Orders,
        Field::Cvr,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::GroupLabel => "group label",
            Field::Targeting => "targeting",
            Field::MatchType => "match type",
            Field::SearchTerm => "search term",
            Field::Impressions => "impressions",
            Field::Clicks => "clicks",
            Field::Ctr => "CTR",
            Field::AvgCpc => "avg. CPC",
            Field::Spend => "spend",
            Field::Revenue => "revenue",
            Field::Acos => "ACOS",
            Field::Roas => "ROAS",
            Field::Orders => "orders",
            Field::Cvr => "CVR",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zero-based column positions for each [`Field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub group_label: usize,
    pub targeting: usize,
    pub match_type: usize,
    pub search_term: usize,
    pub impressions: usize,
    pub clicks: usize,
    pub ctr: usize,
    pub avg_cpc: usize,
    pub spend: usize,
    pub revenue: usize,
    pub acos: usize,
    pub roas: usize,
    pub orders: usize,
    pub cvr: usize,
}

impl ColumnLayout {
    /// Sponsored Products search-term report export.
    ///
    /// Column 18 is not read.
    pub const SEARCH_TERM_REPORT: ColumnLayout = ColumnLayout {
        group_label: 5,
        targeting: 6,
        match_type: 7,
        search_term: 8,
        impressions: 9,
        clicks: 10,
        ctr: 11,
        avg_cpc: 12,
        spend: 13,
        revenue: 14,
        acos: 15,
        roas: 16,
        orders: 17,
        cvr: 19,
    };

    pub fn index(&self, field: Field) -> usize {
        match field {
            Field::GroupLabel => self.group_label,
            Field::Targeting => self.targeting,
            Field::MatchType => self.match_type,
            Field::SearchTerm => self.search_term,
            Field::Impressions => self.impressions,
            Field::Clicks => self.clicks,
            Field::Ctr => self.ctr,
            Field::AvgCpc => self.avg_cpc,
            Field::Spend => self.spend,
            Field::Revenue => self.revenue,
            Field::Acos => self.acos,
            Field::Roas => self.roas,
            Field::Orders => self.orders,
            Field::Cvr => self.cvr,
        }
    }

    /// Narrowest row that has every field of this layout.
    pub fn min_width(&self) -> usize {
        Field::ALL
            .iter()
            .map(|field| self.index(*field))
            .max()
            .map_or(0, |index| index + 1)
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::SEARCH_TERM_REPORT
    }
}
