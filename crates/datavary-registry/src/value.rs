use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Example payload stored in a generator pool.
///
/// Serialized untagged, so pools are written as plain JSON/TOML scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ExampleValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ExampleValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ExampleValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ExampleValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ExampleValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ExampleValue::Int(value) => Some(*value as f64),
            ExampleValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ExampleValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Convert into a `serde_json::Value`. Non-finite floats become null.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ExampleValue::Null => serde_json::Value::Null,
            ExampleValue::Bool(value) => serde_json::Value::Bool(*value),
            ExampleValue::Int(value) => serde_json::Value::from(*value),
            ExampleValue::Float(value) => serde_json::Number::from_f64(*value)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            ExampleValue::Text(value) => serde_json::Value::String(value.clone()),
        }
    }
}

/// Plain rendering used for CSV cells; null renders empty.
impl fmt::Display for ExampleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExampleValue::Null => Ok(()),
            ExampleValue::Bool(value) => write!(f, "{value}"),
            ExampleValue::Int(value) => write!(f, "{value}"),
            ExampleValue::Float(value) => write!(f, "{value}"),
            ExampleValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for ExampleValue {
    fn from(value: bool) -> Self {
        ExampleValue::Bool(value)
    }
}

impl From<i64> for ExampleValue {
    fn from(value: i64) -> Self {
        ExampleValue::Int(value)
    }
}

impl From<f64> for ExampleValue {
    fn from(value: f64) -> Self {
        ExampleValue::Float(value)
    }
}

impl From<&str> for ExampleValue {
    fn from(value: &str) -> Self {
        ExampleValue::Text(value.to_string())
    }
}

impl From<String> for ExampleValue {
    fn from(value: String) -> Self {
        ExampleValue::Text(value)
    }
}
