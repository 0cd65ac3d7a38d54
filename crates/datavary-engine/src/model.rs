use std::collections::BTreeMap;
use std::fmt;

use datavary_registry::{ExampleValue, GeneratorEntry, Label, LabeledValue};
use schemars::JsonSchema;
use serde::de::{self, DeserializeOwned, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::VariationError;

/// Binding for one field: a registry type name or an inline example set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FieldSpec {
    /// Semantic type resolved through the registry.
    Generator(String),
    /// Examples supplied directly for this field.
    Inline(GeneratorEntry),
}

impl FieldSpec {
    pub fn generator(type_name: impl Into<String>) -> Self {
        FieldSpec::Generator(type_name.into())
    }

    pub fn inline(entry: GeneratorEntry) -> Self {
        FieldSpec::Inline(entry)
    }
}

impl From<&str> for FieldSpec {
    fn from(value: &str) -> Self {
        FieldSpec::Generator(value.to_string())
    }
}

impl From<GeneratorEntry> for FieldSpec {
    fn from(value: GeneratorEntry) -> Self {
        FieldSpec::Inline(value)
    }
}

/// Ordered field specification for one test group.
///
/// Declaration order is kept and drives the column order of every variation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSpec {
    fields: Vec<(String, FieldSpec)>,
}

impl DataSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field; redeclaring a name replaces its spec in place.
    pub fn field(mut self, name: impl Into<String>, spec: impl Into<FieldSpec>) -> Self {
        self.insert(name.into(), spec.into());
        self
    }

    pub fn insert(&mut self, name: String, spec: FieldSpec) {
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = spec,
            None => self.fields.push((name, spec)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, spec)| spec)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Keep only the fields named in `only`, in declaration order.
    pub fn retain_only(&self, only: &[&str]) -> crate::errors::Result<DataSpec> {
        if let Some(missing) = only.iter().find(|name| !self.contains(name)) {
            return Err(VariationError::OrchestrationMisuse {
                field: (*missing).to_string(),
            });
        }
        let fields = self
            .fields
            .iter()
            .filter(|(name, _)| only.contains(&name.as_str()))
            .cloned()
            .collect();
        Ok(DataSpec { fields })
    }

    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

impl Serialize for DataSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, spec) in &self.fields {
            map.serialize_entry(name, spec)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DataSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DataSpecVisitor;

        impl<'de> Visitor<'de> for DataSpecVisitor {
            type Value = DataSpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to type names or inline entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<DataSpec, A::Error> {
                let mut fields: Vec<(String, FieldSpec)> = Vec::new();
                while let Some((name, spec)) = map.next_entry::<String, FieldSpec>()? {
                    if fields.iter().any(|(existing, _)| *existing == name) {
                        return Err(de::Error::custom(format!("duplicate field '{name}'")));
                    }
                    fields.push((name, spec));
                }
                Ok(DataSpec { fields })
            }
        }

        deserializer.deserialize_map(DataSpecVisitor)
    }
}

impl JsonSchema for DataSpec {
    fn schema_name() -> String {
        "DataSpec".to_string()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        <BTreeMap<String, FieldSpec>>::json_schema(generator)
    }
}

/// A field's examples after resolution, ordered valid, edge, invalid.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValues {
    pub key: String,
    pub values: Vec<LabeledValue>,
}

impl FieldValues {
    pub fn first(&self) -> Option<&LabeledValue> {
        self.values.first()
    }

    pub fn count(&self, label: Label) -> usize {
        self.values.iter().filter(|item| item.label == label).count()
    }
}

/// Which sweep a variation was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pass {
    ValidEdge,
    Invalid,
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pass::ValidEdge => f.write_str("valid_edge"),
            Pass::Invalid => f.write_str("invalid"),
        }
    }
}

/// One complete row: exactly one value per field, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Variation {
    entries: Vec<(String, LabeledValue)>,
}

impl Variation {
    pub(crate) fn from_entries(entries: Vec<(String, LabeledValue)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, field: &str) -> Option<&ExampleValue> {
        self.labeled(field).map(|item| &item.value)
    }

    /// Category of the value chosen for `field`.
    pub fn label(&self, field: &str) -> Option<Label> {
        self.labeled(field).map(|item| item.label)
    }

    fn labeled(&self, field: &str) -> Option<&LabeledValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, item)| item)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExampleValue)> {
        self.entries
            .iter()
            .map(|(name, item)| (name.as_str(), &item.value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when at least one field carries an invalid-labeled value.
    pub fn has_invalid(&self) -> bool {
        self.entries.iter().any(|(_, item)| item.is_invalid())
    }

    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .entries
            .iter()
            .map(|(name, item)| (name.clone(), item.value.to_json()))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }

    /// Deserialize the row into a caller-defined struct keyed by field name.
    pub fn decode<T: DeserializeOwned>(&self) -> crate::errors::Result<T> {
        Ok(serde_json::from_value(self.to_json())?)
    }
}

impl Serialize for Variation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, item) in &self.entries {
            map.serialize_entry(name, &item.value)?;
        }
        map.end()
    }
}
