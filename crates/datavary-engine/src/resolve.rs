use datavary_registry::Registry;
use tracing::debug;

use crate::errors::{Result, VariationError};
use crate::model::{DataSpec, FieldSpec, FieldValues};

/// Resolve every field of `spec` into its labeled examples.
///
/// Fails on the first field that names an unregistered type or resolves to
/// no examples at all.
pub fn resolve_field_values(spec: &DataSpec, registry: &Registry) -> Result<Vec<FieldValues>> {
    spec.iter()
        .map(|(field, field_spec)| {
            let entry = match field_spec {
                FieldSpec::Inline(entry) => entry,
                FieldSpec::Generator(type_name) => {
                    registry
                        .get(type_name)
                        .ok_or_else(|| VariationError::UnknownType {
                            field: field.to_string(),
                            type_name: type_name.clone(),
                        })?
                }
            };

            if entry.is_empty() {
                return Err(VariationError::NoExampleValues {
                    field: field.to_string(),
                });
            }

            debug!(
                field = %field,
                valid = entry.valid.len(),
                edge = entry.edge.len(),
                invalid = entry.invalid.len(),
                "field resolved"
            );

            Ok(FieldValues {
                key: field.to_string(),
                values: entry.labeled(),
            })
        })
        .collect()
}
