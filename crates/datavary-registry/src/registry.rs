use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entry::GeneratorEntry;
use crate::errors::{RegistryError, Result};

/// Immutable mapping from semantic type names to example pools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    entries: BTreeMap<String, GeneratorEntry>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Look up the pools registered for `type_name`.
    pub fn resolve(&self, type_name: &str) -> Result<&GeneratorEntry> {
        self.entries
            .get(type_name)
            .ok_or_else(|| RegistryError::UnknownType(type_name.to_string()))
    }

    pub fn get(&self, type_name: &str) -> Option<&GeneratorEntry> {
        self.entries.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// Registered type names in sorted order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GeneratorEntry)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Layer `overlay` on top of `self`; overlay entries replace same-named ones.
    pub fn layered(mut self, overlay: Registry) -> Registry {
        for (name, entry) in overlay.entries {
            if self.entries.insert(name.clone(), entry).is_some() {
                debug!(type_name = %name, "registry entry overridden");
            }
        }
        self
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a registry file, picking the format from the extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let registry = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            Some("toml") => Self::from_toml_str(&content)?,
            _ => {
                return Err(RegistryError::UnsupportedFormat(
                    path.display().to_string(),
                ));
            }
        };
        debug!(path = %path.display(), types = registry.len(), "registry loaded");
        Ok(registry)
    }
}

/// Assembles a registry before it is frozen.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: BTreeMap<String, GeneratorEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type, replacing any entry already registered under the name.
    pub fn entry(mut self, type_name: impl Into<String>, entry: GeneratorEntry) -> Self {
        self.entries.insert(type_name.into(), entry);
        self
    }

    /// Add a type, rejecting names that are already registered.
    pub fn try_entry(
        mut self,
        type_name: impl Into<String>,
        entry: GeneratorEntry,
    ) -> Result<Self> {
        let type_name = type_name.into();
        if self.entries.contains_key(&type_name) {
            return Err(RegistryError::DuplicateType(type_name));
        }
        self.entries.insert(type_name, entry);
        Ok(self)
    }

    pub fn build(self) -> Registry {
        Registry {
            entries: self.entries,
        }
    }
}
