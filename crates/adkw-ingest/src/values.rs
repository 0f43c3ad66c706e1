//! Polars `AnyValue` to report cell conversion.

use polars::prelude::{AnyValue, DataFrame};

use adkw_model::{Cell, Row};

use crate::error::Result;

/// Converts a Polars `AnyValue` to a report [`Cell`].
///
/// Numeric types become [`Cell::Number`], strings become [`Cell::Text`]
/// (blank strings are null), anything else keeps its display form.
pub fn any_to_cell(value: AnyValue<'_>) -> Cell {
    match value {
        AnyValue::Null => Cell::Null,
        AnyValue::Int8(v) => Cell::Number(f64::from(v)),
        AnyValue::Int16(v) => Cell::Number(f64::from(v)),
        AnyValue::Int32(v) => Cell::Number(f64::from(v)),
        AnyValue::Int64(v) => Cell::Number(v as f64),
        AnyValue::UInt8(v) => Cell::Number(f64::from(v)),
        AnyValue::UInt16(v) => Cell::Number(f64::from(v)),
        AnyValue::UInt32(v) => Cell::Number(f64::from(v)),
        AnyValue::UInt64(v) => Cell::Number(v as f64),
        AnyValue::Float32(v) => Cell::Number(f64::from(v)),
        AnyValue::Float64(v) => Cell::Number(v),
        AnyValue::String(s) => Cell::text(s),
        AnyValue::StringOwned(s) => Cell::text(s.as_str()),
        AnyValue::Boolean(b) => Cell::Text(b.to_string()),
        other => Cell::text(other.to_string()),
    }
}

/// Converts every row of `df` into a positional [`Row`].
pub fn frame_to_rows(df: &DataFrame) -> Result<Vec<Row>> {
    let columns = df.get_columns();
    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut cells = Vec::with_capacity(columns.len());
        for column in columns {
            cells.push(any_to_cell(column.get(idx)?));
        }
        rows.push(Row::new(cells));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_values() {
        assert_eq!(any_to_cell(AnyValue::Int64(1500)), Cell::Number(1500.0));
        assert_eq!(any_to_cell(AnyValue::Float64(0.015)), Cell::Number(0.015));
        assert_eq!(any_to_cell(AnyValue::UInt32(7)), Cell::Number(7.0));
    }

    #[test]
    fn test_string_values() {
        assert_eq!(
            any_to_cell(AnyValue::String("EXACT")),
            Cell::Text("EXACT".to_string())
        );
        assert_eq!(any_to_cell(AnyValue::String("  ")), Cell::Null);
        assert_eq!(any_to_cell(AnyValue::Null), Cell::Null);
    }
}
