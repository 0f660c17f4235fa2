//! Validation report

use serde::Serialize;

use crate::error::{TopologyError, TopologyResult};

use super::types::{Severity, Violation};

/// Receiver of findings produced by the individual checks
pub trait ReportSink {
    fn add(&mut self, severity: Severity, violation: Violation);

    fn add_error(&mut self, violation: Violation) {
        self.add(Severity::Error, violation);
    }

    fn add_warning(&mut self, violation: Violation) {
        self.add(Severity::Warning, violation);
    }
}

/// Every finding of one validation run, in check order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
    pub warnings: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no error-level violation was found; warnings do not count.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.violations.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Errors followed by warnings, each tagged with its severity.
    pub fn findings(&self) -> impl Iterator<Item = (Severity, &Violation)> {
        self.violations
            .iter()
            .map(|v| (Severity::Error, v))
            .chain(self.warnings.iter().map(|v| (Severity::Warning, v)))
    }

    /// Findings attached to one component.
    pub fn for_component<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = (Severity, &'a Violation)> + 'a {
        self.findings().filter(move |(_, v)| v.component() == name)
    }

    /// `Ok(self)` when valid, `TopologyError::Invalid` otherwise.
    pub fn into_result(self) -> TopologyResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(TopologyError::Invalid { report: self })
        }
    }
}

impl ReportSink for ValidationReport {
    fn add(&mut self, severity: Severity, violation: Violation) {
        match severity {
            Severity::Error => self.violations.push(violation),
            Severity::Warning => self.warnings.push(violation),
        }
    }
}
