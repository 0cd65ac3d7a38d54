use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::value::ExampleValue;

/// Category an example value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Valid,
    Edge,
    Invalid,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Valid => "valid",
            Label::Edge => "edge",
            Label::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One example tagged with its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub label: Label,
    pub value: ExampleValue,
}

impl LabeledValue {
    pub fn new(label: Label, value: ExampleValue) -> Self {
        Self { label, value }
    }

    pub fn is_invalid(&self) -> bool {
        self.label == Label::Invalid
    }
}

/// Example pools for one semantic type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeneratorEntry {
    /// Values the system under test must accept.
    pub valid: Vec<ExampleValue>,
    /// Boundary values that are still acceptable.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edge: Vec<ExampleValue>,
    /// Values the system under test must reject.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub invalid: Vec<ExampleValue>,
}

impl GeneratorEntry {
    pub fn new<I, V>(valid: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ExampleValue>,
    {
        Self {
            valid: valid.into_iter().map(Into::into).collect(),
            edge: Vec::new(),
            invalid: Vec::new(),
        }
    }

    pub fn with_edge<I, V>(mut self, edge: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ExampleValue>,
    {
        self.edge = edge.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_invalid<I, V>(mut self, invalid: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ExampleValue>,
    {
        self.invalid = invalid.into_iter().map(Into::into).collect();
        self
    }

    pub fn len(&self) -> usize {
        self.valid.len() + self.edge.len() + self.invalid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All examples tagged with their label, ordered valid, edge, invalid.
    pub fn labeled(&self) -> Vec<LabeledValue> {
        let valid = self.valid.iter().map(|v| (Label::Valid, v));
        let edge = self.edge.iter().map(|v| (Label::Edge, v));
        let invalid = self.invalid.iter().map(|v| (Label::Invalid, v));
        valid
            .chain(edge)
            .chain(invalid)
            .map(|(label, value)| LabeledValue::new(label, value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_keeps_category_order() {
        let entry = GeneratorEntry::new(["v"])
            .with_invalid(["bad"])
            .with_edge(["e1", "e2"]);
        let labels: Vec<Label> = entry.labeled().iter().map(|item| item.label).collect();
        assert_eq!(
            labels,
            vec![Label::Valid, Label::Edge, Label::Edge, Label::Invalid]
        );
    }

    #[test]
    fn optional_pools_default_to_empty() {
        let entry: GeneratorEntry = serde_json::from_str(r#"{"valid": [1]}"#).expect("parse");
        assert!(entry.edge.is_empty());
        assert!(entry.invalid.is_empty());
        assert_eq!(entry.len(), 1);
    }
}
