use std::path::Path;

use anyhow::Result;
use microtopo::resolve;
use serde_json::json;

use super::{emit_report, prepare, GlobalOptions};
use crate::ui::json;
use crate::ui::views::check::{render_check_header, render_report, render_summary};

pub fn cmd_check(file: &Path, strict_warnings: bool, opts: &GlobalOptions) -> Result<bool> {
    let session = prepare(
        file,
        "check",
        opts,
        json!({ "strict_warnings": strict_warnings }),
    )?;
    let ui = session.ui;

    if !opts.json && !ui.quiet {
        print!("{}", render_check_header(file, strict_warnings, &ui));
    }

    let (document, report) = session.pipeline.check(&session.config)?;

    // A valid document must also be instantiable.
    if report.is_valid() {
        let order = resolve(&document.topology)?;
        tracing::debug!(components = order.len(), "instantiation order resolved");
    }

    let passed = report.is_valid() && !(strict_warnings && report.warning_count() > 0);
    tracing::info!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        passed,
        "check finished"
    );

    if opts.json {
        emit_report("check", &report)?;
        json::emit(
            "complete",
            "check",
            json!({
                "components": document.topology.len(),
                "errors": report.error_count(),
                "warnings": report.warning_count(),
                "success": passed,
            }),
        )?;
    } else {
        print!("{}", render_report(&report, &ui));
        print!("{}", render_summary(document.topology.len(), &report, passed, &ui));
    }

    Ok(passed)
}
