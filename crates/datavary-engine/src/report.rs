use serde::Serialize;

use crate::model::{FieldValues, Variation};
use datavary_registry::Label;

/// Severity level for coverage issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Structured coverage issue with location and hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariationIssue {
    pub severity: IssueSeverity,
    pub code: String,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl VariationIssue {
    pub fn new(
        severity: IssueSeverity,
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
        hint: Option<String>,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            path: path.into(),
            message: message.into(),
            hint,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }
}

/// Inspect resolved fields and the invalid sweep for weak coverage.
///
/// With `strict` set, empty valid pools and invalid rows that carry no
/// invalid value are reported as errors instead of warnings.
pub fn coverage_issues(
    fields: &[FieldValues],
    invalid: &[Variation],
    strict: bool,
) -> Vec<VariationIssue> {
    let escalated = if strict {
        IssueSeverity::Error
    } else {
        IssueSeverity::Warning
    };
    let mut issues = Vec::new();

    for field in fields {
        let path = format!("/fields/{}", field.key);
        if field.count(Label::Valid) == 0 {
            issues.push(VariationIssue::new(
                escalated,
                "empty_valid_pool",
                path.clone(),
                format!("field '{}' has no valid examples", field.key),
                Some("add at least one valid example".to_string()),
            ));
        }
        if field.count(Label::Invalid) == 0 {
            issues.push(VariationIssue::new(
                IssueSeverity::Warning,
                "invalid_fallback",
                path,
                format!(
                    "field '{}' has no invalid examples; the invalid pass repeats its first value",
                    field.key
                ),
                None,
            ));
        }
    }

    for (index, row) in invalid.iter().enumerate() {
        if !row.has_invalid() {
            issues.push(VariationIssue::new(
                escalated,
                "invalid_row_without_invalid_value",
                format!("/invalid/{index}"),
                "invalid-pass variation carries no invalid value".to_string(),
                Some("declare invalid examples for at least one field".to_string()),
            ));
        }
    }

    issues
}
