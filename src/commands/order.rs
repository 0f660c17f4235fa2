use std::path::Path;

use anyhow::Result;
use microtopo::TopologyError;
use serde_json::json;

use super::{emit_report, prepare, GlobalOptions};
use crate::ui::json;
use crate::ui::views::check::render_report;
use crate::ui::views::order::render_order;

pub fn cmd_order(file: &Path, opts: &GlobalOptions) -> Result<bool> {
    let session = prepare(file, "order", opts, json!({}))?;
    let ui = session.ui;

    let loaded = match session.pipeline.load(&session.config) {
        Ok(loaded) => loaded,
        Err(TopologyError::Invalid { report }) => {
            if opts.json {
                emit_report("order", &report)?;
                json::emit(
                    "complete",
                    "order",
                    json!({ "success": false, "errors": report.error_count() }),
                )?;
            } else {
                eprintln!("Cannot resolve an invalid topology:");
                eprint!("{}", render_report(&report, &ui));
            }
            return Ok(false);
        }
        Err(err) => return Err(err.into()),
    };

    if opts.json {
        for (index, entry) in loaded.order.iter().enumerate() {
            json::emit(
                "entry",
                "order",
                json!({
                    "index": index,
                    "name": entry.name,
                    "creator": entry.creator,
                    "depth": entry.depth,
                    "position": entry.position,
                }),
            )?;
        }
        json::emit(
            "complete",
            "order",
            json!({
                "success": true,
                "components": loaded.order.len(),
                "warnings": loaded.report.warning_count(),
            }),
        )?;
    } else {
        if !ui.quiet && loaded.report.warning_count() > 0 {
            eprint!("{}", render_report(&loaded.report, &ui));
        }
        print!("{}", render_order(&loaded.order, &ui));
    }

    Ok(true)
}
