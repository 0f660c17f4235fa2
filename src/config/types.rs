//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TopologyResult;
use crate::registry::{ClassRegistry, ClassSchema};

use super::loader;

/// What to do with an `affects` entry naming an undefined component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AffectsPolicy {
    /// Unresolved `affects` targets are reference errors
    #[default]
    Error,
    /// Unresolved `affects` targets are reported as warnings
    Warn,
}

impl AffectsPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            _ => None,
        }
    }
}

/// What to do with a class that has no registered schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnknownClassPolicy {
    #[default]
    Ignore,
    Warn,
}

impl UnknownClassPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ignore" => Some(Self::Ignore),
            "warn" | "warning" => Some(Self::Warn),
            _ => None,
        }
    }
}

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ValidationConfig {
    #[serde(default)]
    pub unresolved_affects: AffectsPolicy,

    #[serde(default)]
    pub unknown_class: UnknownClassPolicy,

    /// Names that resolve without being defined in the document
    #[serde(default)]
    pub builtins: Vec<String>,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quiet" => Some(Self::Quiet),
            "normal" => Some(Self::Normal),
            "verbose" => Some(Self::Verbose),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Per-class schemas, keyed by class name
    #[serde(default)]
    pub classes: BTreeMap<String, ClassSchema>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TopologyResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Class registry built from the `[classes]` tables
    pub fn registry(&self) -> ClassRegistry {
        ClassRegistry::from_schemas(self.classes.clone())
    }
}
