//! Subcommand implementations
//!
//! Every command returns `Ok(true)` on success and `Ok(false)` when the
//! topology was read but did not pass; fatal errors propagate.

mod affects;
mod check;
mod order;
mod parse;
mod roles;

pub use affects::cmd_affects;
pub use check::cmd_check;
pub use order::cmd_order;
pub use parse::cmd_parse;
pub use roles::cmd_roles;

use std::path::{Path, PathBuf};

use anyhow::Result;
use microtopo::{Config, TopologyError, TopologyPipeline, ValidationReport};
use serde_json::{json, Value};

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::output::print_config_warnings;

/// Flags shared by every subcommand
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorWhen>,
    pub config: Option<PathBuf>,
}

pub(crate) struct Session {
    pub pipeline: TopologyPipeline,
    pub config: Config,
    pub ui: UiContext,
}

/// Load the configuration for `file`, report its warnings and emit the
/// `start` event.
pub(crate) fn prepare(file: &Path, command: &str, opts: &GlobalOptions, start: Value) -> Result<Session> {
    let pipeline = TopologyPipeline::new(file).with_config_path(opts.config.clone());
    let (config, warnings) = pipeline.load_config()?;
    let ui = UiContext::new(opts.json, opts.verbose, opts.color, &config);
    print_config_warnings(&warnings, &ui);

    tracing::info!(file = %file.display(), command, "configuration loaded");
    tracing::debug!(?config, "effective configuration");

    if opts.json {
        let mut fields = json!({ "file": file.display().to_string() });
        if let (Some(map), Value::Object(extra)) = (fields.as_object_mut(), start) {
            map.extend(extra);
        }
        json::emit("start", command, fields)?;
    }

    Ok(Session {
        pipeline,
        config,
        ui,
    })
}

/// One `violation` event per finding.
pub(crate) fn emit_report(command: &str, report: &ValidationReport) -> Result<()> {
    for (severity, violation) in report.findings() {
        json::emit(
            "violation",
            command,
            json!({
                "severity": severity,
                "component": violation.component(),
                "violation": violation,
                "message": violation.to_string(),
                "recommendation": violation.recommendation(),
            }),
        )?;
    }
    Ok(())
}

/// The `error` event written in JSON mode when a command fails.
pub fn error_event(command: &str, err: &anyhow::Error) -> Value {
    let fields = match err.downcast_ref::<TopologyError>() {
        Some(TopologyError::Cycle { cycles }) => json!({
            "kind": "cycle",
            "message": err.to_string(),
            "cycles": cycles,
        }),
        Some(TopologyError::Invalid { report }) => json!({
            "kind": "invalid",
            "message": err.to_string(),
            "errors": report.error_count(),
            "warnings": report.warning_count(),
        }),
        Some(topology_err) => json!({
            "kind": topology_err.kind(),
            "message": topology_err.to_string(),
        }),
        None => json!({
            "kind": "other",
            "message": format!("{:#}", err),
        }),
    };
    json::event("error", command, fields)
}
