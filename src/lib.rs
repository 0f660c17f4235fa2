//! microtopo - microscope device topology toolkit
//!
//! A topology file is a YAML mapping of component names to descriptors
//! (class, role, init parameters, children, dependencies, affects). This
//! crate parses such files, validates them, and computes the order in
//! which a hardware runtime has to instantiate the components.

pub mod affects;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod registry;
pub mod resolver;
pub mod roles;
pub mod validator;

// Re-exports for convenience
pub use affects::{plan_metadata, MetadataBinding, MetadataKind, MetadataPlan};
pub use config::Config;
pub use error::{TopologyError, TopologyResult};
pub use models::{ChildRef, Component, Dependency, ParamValue, Relation, Topology};
pub use parser::{parse_file, parse_str, ParseWarning, ParsedDocument};
pub use pipeline::{LoadedTopology, TopologyPipeline};
pub use registry::{ClassRegistry, ClassSchema, ParamKind, ParamSpec};
pub use resolver::{resolve, ResolvedComponent, ResolvedOrder};
pub use roles::RoleIndex;
pub use validator::{validate, validate_document, Severity, ValidationOptions, ValidationReport, Violation};
