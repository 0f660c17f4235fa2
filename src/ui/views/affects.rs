use microtopo::MetadataPlan;

use crate::ui::context::UiContext;
use crate::ui::icon::{self, Icon};

pub fn render_plan(plan: &MetadataPlan, ui: &UiContext) -> String {
    let edge = Icon::Edge.colored(ui.color, ui.unicode);
    let mut out = format!("Metadata plan ({} bindings):\n", plan.bindings.len());

    for binding in &plan.bindings {
        let updates: Vec<&str> = binding.updates.iter().map(|u| u.as_str()).collect();
        out.push_str(&format!(
            "  {} {} {}: {}\n",
            binding.source,
            edge,
            binding.target,
            updates.join(", ")
        ));
    }

    for skipped in &plan.skipped {
        if skipped.warn {
            out.push_str(&format!(
                "  {} {} {} {} - {}\n",
                Icon::Warning.colored(ui.color, ui.unicode),
                skipped.source,
                edge,
                skipped.target,
                skipped.reason
            ));
        } else if ui.verbose > 0 {
            let line = format!("  {} -> {} skipped: {}", skipped.source, skipped.target, skipped.reason);
            out.push_str(&icon::dim(&line, ui.color));
            out.push('\n');
        }
    }
    out
}
