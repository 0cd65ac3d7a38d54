use thiserror::Error;

use crate::report::VariationIssue;

/// Errors raised while building variations.
///
/// All of them are configuration defects detected before any test case is
/// produced.
#[derive(Debug, Error)]
pub enum VariationError {
    #[error("field '{field}' references unknown type '{type_name}'")]
    UnknownType { field: String, type_name: String },
    #[error("field '{field}' has no example values")]
    NoExampleValues { field: String },
    #[error("field '{field}' is not declared in the data specification")]
    OrchestrationMisuse { field: String },
    #[error("strict mode rejected {} coverage issue(s)", .0.len())]
    Strict(Vec<VariationIssue>),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for variation operations.
pub type Result<T> = std::result::Result<T, VariationError>;
