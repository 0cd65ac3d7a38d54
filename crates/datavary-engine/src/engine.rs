use datavary_registry::Registry;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::{Result, VariationError};
use crate::model::{DataSpec, Pass, Variation};
use crate::permutations::{invalid_columns, permutations, valid_edge_columns};
use crate::report::{VariationIssue, coverage_issues};
use crate::resolve::resolve_field_values;

/// Options for building variations.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariationOptions {
    /// Reject weak invalid coverage instead of warning about it.
    pub strict: bool,
}

/// Both sweeps plus the coverage issues found while building them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariationSet {
    pub valid_edge: Vec<Variation>,
    pub invalid: Vec<Variation>,
    pub issues: Vec<VariationIssue>,
}

impl VariationSet {
    pub fn len(&self) -> usize {
        self.valid_edge.len() + self.invalid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows in output order, each tagged with the sweep it came from.
    pub fn iter(&self) -> impl Iterator<Item = (Pass, &Variation)> {
        let valid_edge = self.valid_edge.iter().map(|row| (Pass::ValidEdge, row));
        let invalid = self.invalid.iter().map(|row| (Pass::Invalid, row));
        valid_edge.chain(invalid)
    }

    pub fn into_variations(self) -> Vec<Variation> {
        let mut rows = self.valid_edge;
        rows.extend(self.invalid);
        rows
    }
}

/// Build every variation for `spec`: the valid+edge sweep followed by the
/// invalid sweep.
pub fn build_variations(spec: &DataSpec, registry: &Registry) -> Result<Vec<Variation>> {
    Ok(plan_variations(spec, registry, VariationOptions::default())?.into_variations())
}

/// Like [`build_variations`], keeping the sweeps apart and reporting
/// coverage issues.
pub fn plan_variations(
    spec: &DataSpec,
    registry: &Registry,
    options: VariationOptions,
) -> Result<VariationSet> {
    let fields = resolve_field_values(spec, registry)?;

    let valid_edge = permutations(&valid_edge_columns(&fields)?);
    let invalid = permutations(&invalid_columns(&fields)?);

    let issues = coverage_issues(&fields, &invalid, options.strict);
    if issues.iter().any(VariationIssue::is_error) {
        return Err(VariationError::Strict(issues));
    }
    for issue in &issues {
        warn!(code = %issue.code, path = %issue.path, "{}", issue.message);
    }

    info!(
        fields = fields.len(),
        valid_edge = valid_edge.len(),
        invalid = invalid.len(),
        warnings = issues.len(),
        "variations built"
    );

    Ok(VariationSet {
        valid_edge,
        invalid,
        issues,
    })
}
