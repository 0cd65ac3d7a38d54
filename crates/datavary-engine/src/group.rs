//! Boundary with the test runner.
//!
//! A [`TestGroup`] owns one data specification. Each test declared against it
//! becomes a [`TestPlan`]: either a single run without data, or one
//! [`VariationCase`] per variation. Cases carry their own values, so runners
//! may execute them in any order or in parallel.

use datavary_registry::Registry;
use serde::Serialize;
use tracing::info;

use crate::engine::{VariationOptions, plan_variations};
use crate::errors::Result;
use crate::model::{DataSpec, Pass, Variation};
use crate::report::VariationIssue;
use crate::resolve::resolve_field_values;

/// Data specification registered against a registry.
#[derive(Debug, Clone)]
pub struct TestGroup<'r> {
    registry: &'r Registry,
    spec: DataSpec,
    options: VariationOptions,
}

impl<'r> TestGroup<'r> {
    /// Register `spec`, validating every field up front.
    pub fn register(registry: &'r Registry, spec: DataSpec) -> Result<Self> {
        resolve_field_values(&spec, registry)?;
        Ok(Self {
            registry,
            spec,
            options: VariationOptions::default(),
        })
    }

    pub fn with_options(mut self, options: VariationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn spec(&self) -> &DataSpec {
        &self.spec
    }

    /// Plan the cases for one test.
    ///
    /// An empty `only` means the test uses no data and runs once.
    pub fn plan(&self, title: &str, only: &[&str]) -> Result<TestPlan> {
        if only.is_empty() {
            return Ok(TestPlan::Single {
                title: title.to_string(),
            });
        }

        let spec = self.spec.retain_only(only)?;
        let set = plan_variations(&spec, self.registry, self.options)?;
        let cases: Vec<VariationCase> = set
            .iter()
            .enumerate()
            .map(|(index, (pass, variation))| VariationCase {
                index,
                name: format!("Variation {}", index + 1),
                pass,
                variation: variation.clone(),
            })
            .collect();

        info!(title = %title, cases = cases.len(), "test planned");

        Ok(TestPlan::Variations {
            title: title.to_string(),
            cases,
            issues: set.issues,
        })
    }
}

/// Cases generated for one declared test.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TestPlan {
    /// No fields selected: run the test body once as-is.
    Single { title: String },
    /// One case per variation.
    Variations {
        title: String,
        cases: Vec<VariationCase>,
        issues: Vec<VariationIssue>,
    },
}

impl TestPlan {
    pub fn title(&self) -> &str {
        match self {
            TestPlan::Single { title } | TestPlan::Variations { title, .. } => title,
        }
    }

    pub fn cases(&self) -> &[VariationCase] {
        match self {
            TestPlan::Single { .. } => &[],
            TestPlan::Variations { cases, .. } => cases,
        }
    }

    /// Number of test invocations the runner registers.
    pub fn invocations(&self) -> usize {
        match self {
            TestPlan::Single { .. } => 1,
            TestPlan::Variations { cases, .. } => cases.len(),
        }
    }
}

/// One executable test invocation and the values it receives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariationCase {
    pub index: usize,
    pub name: String,
    pub pass: Pass,
    #[serde(rename = "values")]
    pub variation: Variation,
}

impl VariationCase {
    /// True for invalid-pass cases that actually carry an invalid value.
    pub fn expects_rejection(&self) -> bool {
        self.pass == Pass::Invalid && self.variation.has_invalid()
    }
}
