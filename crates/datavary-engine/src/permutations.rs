//! Index-aligned row construction.
//!
//! Row `i` takes each column's `i`-th value; a column shorter than the longest
//! one contributes its first value instead. Columns are never cycled.

use datavary_registry::LabeledValue;

use crate::errors::{Result, VariationError};
use crate::model::{FieldValues, Variation};

/// Non-empty filtered values of one field for a single sweep.
#[derive(Debug, Clone)]
pub struct Column<'a> {
    pub key: &'a str,
    /// Value repeated once the column runs out.
    pub head: &'a LabeledValue,
    pub values: Vec<&'a LabeledValue>,
}

impl<'a> Column<'a> {
    fn new(key: &'a str, values: Vec<&'a LabeledValue>) -> Option<Self> {
        let head = values.first().copied()?;
        Some(Self { key, head, values })
    }
}

/// Columns for the valid+edge sweep: everything not labeled invalid.
///
/// A field holding only invalid examples has nothing to contribute here. If
/// every field is in that state the sweep is empty; otherwise the field fails
/// with `NoExampleValues`.
pub fn valid_edge_columns(fields: &[FieldValues]) -> Result<Vec<Column<'_>>> {
    let filtered: Vec<(&FieldValues, Vec<&LabeledValue>)> = fields
        .iter()
        .map(|field| {
            let values = field.values.iter().filter(|item| !item.is_invalid()).collect();
            (field, values)
        })
        .collect();

    if filtered.iter().all(|(_, values)| values.is_empty()) {
        return Ok(Vec::new());
    }

    filtered
        .into_iter()
        .map(|(field, values)| column(field, values))
        .collect()
}

/// Columns for the invalid sweep.
///
/// A field without invalid examples contributes its first value, so every
/// row stays complete even though that field is not exercising a failure.
pub fn invalid_columns(fields: &[FieldValues]) -> Result<Vec<Column<'_>>> {
    fields
        .iter()
        .map(|field| {
            let mut values: Vec<&LabeledValue> =
                field.values.iter().filter(|item| item.is_invalid()).collect();
            if values.is_empty() {
                values.extend(field.first());
            }
            column(field, values)
        })
        .collect()
}

fn column<'a>(field: &'a FieldValues, values: Vec<&'a LabeledValue>) -> Result<Column<'a>> {
    Column::new(field.key.as_str(), values).ok_or_else(|| VariationError::NoExampleValues {
        field: field.key.clone(),
    })
}

/// Align columns into rows; yields as many rows as the longest column.
pub fn permutations(columns: &[Column<'_>]) -> Vec<Variation> {
    let max_length = columns
        .iter()
        .map(|column| column.values.len())
        .max()
        .unwrap_or(0);

    (0..max_length)
        .map(|index| {
            let entries = columns
                .iter()
                .map(|column| {
                    let value = column.values.get(index).copied().unwrap_or(column.head);
                    (column.key.to_string(), value.clone())
                })
                .collect();
            Variation::from_entries(entries)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use datavary_registry::{ExampleValue, Label};

    use super::*;

    fn field(key: &str, values: &[(Label, i64)]) -> FieldValues {
        FieldValues {
            key: key.to_string(),
            values: values
                .iter()
                .map(|(label, value)| LabeledValue::new(*label, ExampleValue::Int(*value)))
                .collect(),
        }
    }

    #[test]
    fn shorter_columns_repeat_their_first_value() {
        let fields = vec![
            field("a", &[(Label::Valid, 1), (Label::Edge, 2), (Label::Edge, 3)]),
            field("b", &[(Label::Valid, 10), (Label::Edge, 20)]),
        ];
        let columns = valid_edge_columns(&fields).expect("columns");
        let rows = permutations(&columns);

        let b: Vec<Option<i64>> = rows
            .iter()
            .map(|row| row.get("b").and_then(ExampleValue::as_i64))
            .collect();
        assert_eq!(b, vec![Some(10), Some(20), Some(10)]);
    }

    #[test]
    fn no_columns_yield_no_rows() {
        assert!(permutations(&[]).is_empty());
    }

    #[test]
    fn invalid_only_field_rejects_valid_edge_rows() {
        let fields = vec![
            field("a", &[(Label::Valid, 1), (Label::Valid, 2)]),
            field("b", &[(Label::Invalid, -1)]),
        ];
        let err = valid_edge_columns(&fields).expect_err("no usable values for b");
        assert!(matches!(err, VariationError::NoExampleValues { field } if field == "b"));
    }

    #[test]
    fn all_invalid_only_fields_yield_empty_valid_edge_sweep() {
        let fields = vec![
            field("a", &[(Label::Invalid, -1)]),
            field("b", &[(Label::Invalid, -2), (Label::Invalid, -3)]),
        ];
        let columns = valid_edge_columns(&fields).expect("columns");
        assert!(permutations(&columns).is_empty());

        let rows = permutations(&invalid_columns(&fields).expect("columns"));
        assert_eq!(rows.len(), 2);
    }
}
