//! Configuration loading

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{TopologyError, TopologyResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{AffectsPolicy, ColorMode, Config, UnknownClassPolicy, Verbosity};

/// Project config file name, looked up next to the topology file
pub const PROJECT_CONFIG_FILE: &str = "microtopo.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(s) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", s)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> TopologyResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TopologyError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .rsplit('.')
                .next()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration that applies to `document`.
///
/// An explicit path must exist. Otherwise the project config next to the
/// document is used, then the user config, then defaults. Environment
/// overrides are applied last.
pub fn load_for_document(
    document: &Path,
    explicit: Option<&Path>,
) -> TopologyResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) if !path.is_file() => {
            return Err(TopologyError::Config {
                file: path.to_path_buf(),
                message: "config file does not exist".to_string(),
            })
        }
        Some(path) => Some(path.to_path_buf()),
        None => project_config_path(document)
            .filter(|p| p.is_file())
            .or_else(|| user_config_path().filter(|p| p.is_file())),
    };

    let (config, warnings) = match candidate {
        Some(path) => {
            tracing::debug!(config = %path.display(), "loading configuration");
            load_with_warnings(&path)?
        }
        None => {
            tracing::debug!("no configuration file found, using defaults");
            (Config::default(), Vec::new())
        }
    };

    Ok((with_env_overrides(config), warnings))
}

fn project_config_path(document: &Path) -> Option<PathBuf> {
    let dir = match document.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Some(dir.join(PROJECT_CONFIG_FILE))
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("microtopo").join("config.toml"))
}

/// Apply environment variable overrides (MICROTOPO_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

/// Apply overrides read through `get_env`; warnings go to `writer`.
pub fn with_env_overrides_from<W: Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    writer: &mut W,
) -> Config {
    if let Some(value) = get_env("MICROTOPO_UNRESOLVED_AFFECTS") {
        config.validation.unresolved_affects =
            EnvVarValidator::new("MICROTOPO_UNRESOLVED_AFFECTS", &["error", "warn"])
                .parse_with_writer(
                    &value,
                    AffectsPolicy::parse,
                    config.validation.unresolved_affects,
                    writer,
                );
    }

    if let Some(value) = get_env("MICROTOPO_UNKNOWN_CLASS") {
        config.validation.unknown_class =
            EnvVarValidator::new("MICROTOPO_UNKNOWN_CLASS", &["ignore", "warn"])
                .parse_with_writer(
                    &value,
                    UnknownClassPolicy::parse,
                    config.validation.unknown_class,
                    writer,
                );
    }

    // Comma-separated, appended to the configured list
    if let Some(value) = get_env("MICROTOPO_BUILTINS") {
        for name in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if !config.validation.builtins.iter().any(|b| b == name) {
                config.validation.builtins.push(name.to_string());
            }
        }
    }

    if let Some(value) = get_env("MICROTOPO_VERBOSITY") {
        config.output.verbosity = EnvVarValidator::new(
            "MICROTOPO_VERBOSITY",
            &["quiet", "normal", "verbose", "debug"],
        )
        .parse_with_writer(&value, Verbosity::parse, config.output.verbosity, writer);
    }

    if let Some(value) = get_env("MICROTOPO_COLOR") {
        config.output.color =
            EnvVarValidator::new("MICROTOPO_COLOR", &["auto", "always", "never"])
                .parse_with_writer(&value, ColorMode::parse, config.output.color, writer);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "validation",
        "unresolved_affects",
        "unknown_class",
        "builtins",
        "output",
        "verbosity",
        "color",
        "classes",
        "init",
        "properties",
        "strict",
        "kind",
        "required",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .filter(|(_, dist)| *dist <= 2)
        .min_by_key(|(_, dist)| *dist)
        .map(|(candidate, _)| candidate.to_string())
}
