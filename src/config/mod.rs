//! Configuration module for microtopo
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MICROTOPO_*)
//! 3. Project config (`microtopo.toml` next to the topology file, or `--config`)
//! 4. User config (`<config dir>/microtopo/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    load_for_document, load_with_warnings, with_env_overrides, with_env_overrides_from,
    ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{
    AffectsPolicy, ColorMode, Config, OutputConfig, UnknownClassPolicy, ValidationConfig,
    Verbosity,
};
