use std::path::Path;

use anyhow::Result;
use microtopo::{parse_file, plan_metadata};
use serde_json::json;

use super::{prepare, GlobalOptions};
use crate::ui::json;
use crate::ui::output::print_parse_warnings;
use crate::ui::views::affects::render_plan;

pub fn cmd_affects(file: &Path, opts: &GlobalOptions) -> Result<bool> {
    let session = prepare(file, "affects", opts, json!({}))?;
    let document = parse_file(session.pipeline.path())?;
    let plan = plan_metadata(&document.topology);

    if opts.json {
        for binding in &plan.bindings {
            json::emit("binding", "affects", serde_json::to_value(binding)?)?;
        }
        for skipped in &plan.skipped {
            json::emit("skipped", "affects", serde_json::to_value(skipped)?)?;
        }
        json::emit(
            "complete",
            "affects",
            json!({
                "bindings": plan.bindings.len(),
                "warnings": plan.warnings().count(),
            }),
        )?;
    } else {
        print_parse_warnings(&document.warnings, &session.ui);
        print!("{}", render_plan(&plan, &session.ui));
    }

    Ok(true)
}
