//! Variation engine for datavary.
//!
//! Resolves a data specification against a [`Registry`] and aligns each
//! field's examples into complete rows: first a valid+edge sweep, then an
//! invalid sweep. Rows are index-aligned rather than cross-multiplied, so the
//! number of variations tracks the richest field, not the product of fields.

pub mod engine;
pub mod errors;
pub mod group;
pub mod model;
pub mod permutations;
pub mod report;
pub mod resolve;

pub use datavary_registry::{ExampleValue, GeneratorEntry, Label, LabeledValue, Registry};
pub use engine::{VariationOptions, VariationSet, build_variations, plan_variations};
pub use errors::{Result, VariationError};
pub use group::{TestGroup, TestPlan, VariationCase};
pub use model::{DataSpec, FieldSpec, FieldValues, Pass, Variation};
pub use report::{IssueSeverity, VariationIssue};
pub use resolve::resolve_field_values;
