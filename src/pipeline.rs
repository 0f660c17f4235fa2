//! Topology loading pipeline
//!
//! Runs the consumer contract in order:
//!
//! 1. Load configuration for the document
//! 2. Parse the document (structural errors abort)
//! 3. Validate it (all violations are collected)
//! 4. Resolve the instantiation order (cycles abort)

use std::path::{Path, PathBuf};

use crate::config::{load_for_document, Config, ConfigWarning};
use crate::error::TopologyResult;
use crate::parser::{parse_file, ParsedDocument};
use crate::resolver::{resolve, ResolvedOrder};
use crate::validator::{validate_document, ValidationOptions, ValidationReport};

/// A document that passed validation, with its instantiation order.
#[derive(Debug, Clone)]
pub struct LoadedTopology {
    pub document: ParsedDocument,
    pub report: ValidationReport,
    pub order: ResolvedOrder,
}

#[derive(Debug, Clone)]
pub struct TopologyPipeline {
    path: PathBuf,
    config_path: Option<PathBuf>,
    config: Option<Config>,
}

impl TopologyPipeline {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config_path: None,
            config: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Use this config file instead of looking one up next to the document.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Use an already loaded configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn load_config(&self) -> TopologyResult<(Config, Vec<ConfigWarning>)> {
        match &self.config {
            Some(config) => Ok((config.clone(), Vec::new())),
            None => load_for_document(&self.path, self.config_path.as_deref()),
        }
    }

    /// Parse and validate. Violations are returned in the report, not as
    /// an error.
    pub fn check(&self, config: &Config) -> TopologyResult<(ParsedDocument, ValidationReport)> {
        let document = parse_file(&self.path)?;
        let report = validate_document(&document, &ValidationOptions::from_config(config));
        Ok((document, report))
    }

    /// Parse, validate and resolve; an invalid document is an error.
    pub fn load(&self, config: &Config) -> TopologyResult<LoadedTopology> {
        let (document, report) = self.check(config)?;
        let report = report.into_result()?;
        let order = resolve(&document.topology)?;
        Ok(LoadedTopology {
            document,
            report,
            order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TopologyError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_pipeline_load_valid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("secom.odm.yaml");
        fs::write(
            &path,
            "SECOM: {class: Microscope, children: [Light]}\nLight: {class: L, role: light}\n",
        )
        .unwrap();

        let pipeline = TopologyPipeline::new(&path).with_config(Config::default());
        let (config, _) = pipeline.load_config().unwrap();
        let loaded = pipeline.load(&config).unwrap();
        assert_eq!(loaded.order.names(), vec!["SECOM", "Light"]);
        assert!(loaded.report.is_valid());
    }

    #[test]
    fn test_pipeline_load_invalid_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("secom.odm.yaml");
        fs::write(&path, "Light: {class: L, affects: [Camera]}\n").unwrap();

        let pipeline = TopologyPipeline::new(&path);
        let err = pipeline.load(&Config::default()).unwrap_err();
        match err {
            TopologyError::Invalid { report } => assert_eq!(report.error_count(), 1),
            other => panic!("expected invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_pipeline_config_from_project_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("secom.odm.yaml");
        fs::write(&path, "Light: {class: L, affects: [Camera]}\n").unwrap();
        fs::write(
            dir.path().join("microtopo.toml"),
            "[validation]\nunresolved_affects = \"warn\"\n",
        )
        .unwrap();

        let pipeline = TopologyPipeline::new(&path);
        let (config, _) = pipeline.load_config().unwrap();
        let loaded = pipeline.load(&config).unwrap();
        assert_eq!(loaded.report.warning_count(), 1);
    }
}
