//! Semantic validation of a parsed topology
//!
//! Unlike parsing, validation never fails fast: every check runs and all
//! findings end up in one [`ValidationReport`], so an author sees every
//! problem of the document at once.

mod checks;
mod report;
mod types;

use std::collections::BTreeSet;

pub use report::{ReportSink, ValidationReport};
pub use types::{ParamSection, Severity, Violation};

use crate::config::{AffectsPolicy, Config, UnknownClassPolicy};
use crate::models::Topology;
use crate::parser::ParsedDocument;
use crate::registry::ClassRegistry;

/// Knobs of a validation run
#[derive(Debug, Clone, Default)]
pub struct ValidationOptions {
    pub registry: ClassRegistry,
    pub builtins: BTreeSet<String>,
    pub unresolved_affects: AffectsPolicy,
    pub unknown_class: UnknownClassPolicy,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            registry: config.registry(),
            builtins: config.validation.builtins.iter().cloned().collect(),
            unresolved_affects: config.validation.unresolved_affects,
            unknown_class: config.validation.unknown_class,
        }
    }

    pub fn with_registry(mut self, registry: ClassRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_builtin(mut self, name: impl Into<String>) -> Self {
        self.builtins.insert(name.into());
        self
    }

    pub fn with_unresolved_affects(mut self, policy: AffectsPolicy) -> Self {
        self.unresolved_affects = policy;
        self
    }

    pub fn with_unknown_class(mut self, policy: UnknownClassPolicy) -> Self {
        self.unknown_class = policy;
        self
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtins.contains(name)
    }
}

/// Run every check against `topology`.
pub fn validate(topology: &Topology, options: &ValidationOptions) -> ValidationReport {
    let mut report = ValidationReport::new();

    checks::check_unique_names(topology, &mut report);
    checks::check_references(topology, options, &mut report);
    checks::check_ownership(topology, &mut report);
    checks::check_class_schemas(topology, options, &mut report);

    tracing::debug!(
        components = topology.len(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validated topology"
    );
    report
}

/// Validate a parsed document, carrying its parse warnings into the report.
pub fn validate_document(document: &ParsedDocument, options: &ValidationOptions) -> ValidationReport {
    let mut report = validate(&document.topology, options);
    for warning in &document.warnings {
        report.add_warning(Violation::UnknownField {
            component: warning.component.clone(),
            field: warning.field.clone(),
            suggestion: warning.suggestion.clone(),
        });
    }
    report
}
