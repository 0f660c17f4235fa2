//! Error types for microtopo
//!
//! Uses `thiserror` for library errors. Semantic violations found during
//! validation are not errors; they are collected in a
//! [`ValidationReport`](crate::validator::ValidationReport).

use std::path::PathBuf;
use thiserror::Error;

use crate::validator::ValidationReport;

/// Result type alias for microtopo operations
pub type TopologyResult<T> = Result<T, TopologyError>;

/// Main error type for microtopo operations
#[derive(Error, Debug)]
pub enum TopologyError {
    /// Document is not well-formed YAML
    #[error("syntax error in {file}: {message}")]
    Syntax {
        file: PathBuf,
        line: Option<usize>,
        column: Option<usize>,
        message: String,
    },

    /// A field has the wrong shape or a required field is missing
    #[error("schema error in {file}: component '{component}', field '{field}': {message}")]
    Schema {
        file: PathBuf,
        component: String,
        field: String,
        message: String,
    },

    /// Two or more components share a name
    #[error("duplicate component name(s) in {file}: {}", .names.join(", "))]
    DuplicateName { file: PathBuf, names: Vec<String> },

    /// The construction graph (`children` + `dependencies`) is cyclic
    #[error("{}", format_cycles(.cycles))]
    Cycle { cycles: Vec<Vec<String>> },

    /// Validation found at least one error-level violation
    #[error("topology is invalid: {} error(s)", .report.error_count())]
    Invalid { report: ValidationReport },

    /// Configuration file could not be read or parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Topology file not found
    #[error("topology file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TopologyError {
    /// Names of every component taking part in a cycle, in report order.
    pub fn cycle_members(&self) -> Vec<&str> {
        match self {
            TopologyError::Cycle { cycles } => cycles
                .iter()
                .flat_map(|c| c.iter().map(String::as_str))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Short stable identifier used in JSON events.
    pub fn kind(&self) -> &'static str {
        match self {
            TopologyError::Syntax { .. } => "syntax",
            TopologyError::Schema { .. } => "schema",
            TopologyError::DuplicateName { .. } => "duplicate_name",
            TopologyError::Cycle { .. } => "cycle",
            TopologyError::Invalid { .. } => "invalid",
            TopologyError::Config { .. } => "config",
            TopologyError::FileNotFound { .. } => "file_not_found",
            TopologyError::Io(_) => "io",
        }
    }
}

fn format_cycles(cycles: &[Vec<String>]) -> String {
    let rendered: Vec<String> = cycles
        .iter()
        .map(|members| format!("{{{}}}", members.join(", ")))
        .collect();
    format!(
        "construction cycle between components {}",
        rendered.join(" and ")
    )
}
