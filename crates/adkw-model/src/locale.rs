//! Display language for labels and markers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    /// Marker shown in place of an empty keyword list.
    pub fn empty_marker(self) -> &'static str {
        match self {
            Locale::En => "none",
            Locale::Ja => "なし",
        }
    }

    pub fn exact_match(self) -> &'static str {
        match self {
            Locale::En => "exact",
            Locale::Ja => "完全一致",
        }
    }

    pub fn phrase_match(self) -> &'static str {
        match self {
            Locale::En => "phrase",
            Locale::Ja => "フレーズ一致",
        }
    }

    pub fn broad_match(self) -> &'static str {
        match self {
            Locale::En => "broad",
            Locale::Ja => "部分一致",
        }
    }

    pub fn high_heading(self) -> &'static str {
        match self {
            Locale::En => "High-performing keywords",
            Locale::Ja => "パフォーマンスが高いKW",
        }
    }

    pub fn low_heading(self) -> &'static str {
        match self {
            Locale::En => "Low-performing keywords",
            Locale::Ja => "パフォーマンスが低いKW",
        }
    }

    pub fn table_heading(self) -> &'static str {
        match self {
            Locale::En => "Evaluation",
            Locale::Ja => "データ評価",
        }
    }

    pub fn empty_selection_warning(self) -> &'static str {
        match self {
            Locale::En => "select at least one ad group",
            Locale::Ja => "少なくとも1つの広告グループを選択してください。",
        }
    }
}
