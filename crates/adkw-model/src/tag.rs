use std::fmt;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Performance tier assigned to one report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    High,
    Low,
    Other,
    /// The row could not be measured (missing, non-numeric or malformed metrics).
    Error,
}

impl Tag {
    pub const ALL: [Tag; 4] = [Tag::High, Tag::Low, Tag::Other, Tag::Error];

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::High => "high",
            Tag::Low => "low",
            Tag::Other => "other",
            Tag::Error => "error",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, _) => self.as_str(),
            (Locale::Ja, Tag::High) => "高",
            (Locale::Ja, Tag::Low) => "低",
            (Locale::Ja, Tag::Other) => "その他",
            (Locale::Ja, Tag::Error) => "エラー",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
