use std::path::Path;

use anyhow::Result;
use microtopo::parse_file;
use serde_json::json;

use super::{prepare, GlobalOptions};
use crate::ui::json;
use crate::ui::output::print_parse_warnings;
use crate::ui::views::parse::render_components;

pub fn cmd_parse(file: &Path, opts: &GlobalOptions) -> Result<bool> {
    let session = prepare(file, "parse", opts, json!({}))?;
    let document = parse_file(session.pipeline.path())?;

    if opts.json {
        for component in &document.topology {
            json::emit("component", "parse", serde_json::to_value(component)?)?;
        }
        for warning in &document.warnings {
            json::emit(
                "warning",
                "parse",
                json!({
                    "component": warning.component,
                    "field": warning.field,
                    "suggestion": warning.suggestion,
                    "message": warning.to_string(),
                }),
            )?;
        }
        json::emit(
            "complete",
            "parse",
            json!({
                "components": document.topology.len(),
                "warnings": document.warnings.len(),
            }),
        )?;
    } else {
        print_parse_warnings(&document.warnings, &session.ui);
        print!("{}", render_components(file, &document.topology, &session.ui));
    }

    Ok(true)
}
