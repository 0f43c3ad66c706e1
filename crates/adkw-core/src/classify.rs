//! Row classification into performance tiers.
//!
//! Thresholds are fixed business rules. Bounds are inclusive; the first
//! matching tier wins (high before low). Rows between the bands are
//! [`Tag::Other`].

use std::ops::RangeInclusive;

use tracing::debug;

use adkw_model::{Cell, ClassificationError, ColumnLayout, Field, Row, Tag};

pub const HIGH_CTR: RangeInclusive<f64> = 0.006..=0.02;
pub const HIGH_ACOS: RangeInclusive<f64> = 0.05..=0.25;
pub const HIGH_ROAS: RangeInclusive<f64> = 0.04..=0.20;
pub const HIGH_CVR: RangeInclusive<f64> = 0.05..=0.20;

pub const LOW_CTR_MAX: f64 = 0.003;
pub const LOW_ACOS_MIN: f64 = 0.41;
pub const LOW_ROAS: RangeInclusive<f64> = 0.001..=0.025;
pub const LOW_CVR: RangeInclusive<f64> = 0.001..=0.03;

/// The four metrics the tier rules read, validated as finite numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Metrics {
    ctr: f64,
    acos: f64,
    roas: f64,
    cvr: f64,
}

impl Metrics {
    fn read(row: &Row, layout: &ColumnLayout) -> Result<Self, ClassificationError> {
        Ok(Self {
            ctr: metric(row, layout, Field::Ctr)?,
            acos: metric(row, layout, Field::Acos)?,
            roas: metric(row, layout, Field::Roas)?,
            cvr: metric(row, layout, Field::Cvr)?,
        })
    }

    fn is_high(&self) -> bool {
        HIGH_CTR.contains(&self.ctr)
            && HIGH_ACOS.contains(&self.acos)
            && HIGH_ROAS.contains(&self.roas)
            && HIGH_CVR.contains(&self.cvr)
    }

    fn is_low(&self) -> bool {
        self.ctr <= LOW_CTR_MAX
            && self.acos >= LOW_ACOS_MIN
            && LOW_ROAS.contains(&self.roas)
            && LOW_CVR.contains(&self.cvr)
    }

    fn tier(&self) -> Tag {
        if self.is_high() {
            Tag::High
        } else if self.is_low() {
            Tag::Low
        } else {
            Tag::Other
        }
    }
}

fn metric(row: &Row, layout: &ColumnLayout, field: Field) -> Result<f64, ClassificationError> {
    let index = layout.index(field);
    let cell = match row.get(index) {
        None | Some(Cell::Null) => {
            return Err(ClassificationError::MissingField { field, index });
        }
        Some(cell) => cell,
    };
    let Some(value) = cell.as_f64() else {
        return Err(ClassificationError::NonNumeric {
            field,
            index,
            value: cell.as_text().unwrap_or_default(),
        });
    };
    if !value.is_finite() {
        return Err(ClassificationError::NotFinite { field, index });
    }
    Ok(value)
}

/// Validate the row's metrics and apply the tier rules.
///
/// # Errors
///
/// Returns a [`ClassificationError`] when CTR, ACOS, ROAS or CVR is absent,
/// null, non-numeric or not finite.
pub fn evaluate(row: &Row, layout: &ColumnLayout) -> Result<Tag, ClassificationError> {
    Metrics::read(row, layout).map(|metrics| metrics.tier())
}

/// Classify one row. Rows that cannot be measured are [`Tag::Error`].
pub fn classify(row: &Row, layout: &ColumnLayout) -> Tag {
    match evaluate(row, layout) {
        Ok(tag) => tag,
        Err(error) => {
            debug!(%error, "row not classifiable");
            Tag::Error
        }
    }
}

/// One bound of a tier rule, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Threshold {
    pub tag: Tag,
    pub field: Field,
    pub bound: String,
}

/// Every bound of the high and low tiers, in rule order.
pub fn thresholds() -> Vec<Threshold> {
    fn range(tag: Tag, field: Field, range: &RangeInclusive<f64>) -> Threshold {
        Threshold {
            tag,
            field,
            bound: format!("{} ≤ x ≤ {}", range.start(), range.end()),
        }
    }
    vec![
        range(Tag::High, Field::Ctr, &HIGH_CTR),
        range(Tag::High, Field::Acos, &HIGH_ACOS),
        range(Tag::High, Field::Roas, &HIGH_ROAS),
        range(Tag::High, Field::Cvr, &HIGH_CVR),
        Threshold {
            tag: Tag::Low,
            field: Field::Ctr,
            bound: format!("x ≤ {LOW_CTR_MAX}"),
        },
        Threshold {
            tag: Tag::Low,
            field: Field::Acos,
            bound: format!("x ≥ {LOW_ACOS_MIN}"),
        },
        range(Tag::Low, Field::Roas, &LOW_ROAS),
        range(Tag::Low, Field::Cvr, &LOW_CVR),
    ]
}
