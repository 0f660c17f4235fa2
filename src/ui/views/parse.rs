use std::collections::BTreeMap;
use std::path::Path;

use microtopo::{Component, ParamValue, Topology};

use crate::ui::context::UiContext;
use crate::ui::icon::Icon;
use crate::ui::theme;

pub fn render_components(file: &Path, topology: &Topology, ui: &UiContext) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} Topology: {}\n",
        Icon::Component.colored(ui.color, ui.unicode),
        file.display()
    ));
    out.push_str(&format!("Found {} components:\n", topology.len()));

    for component in topology {
        out.push('\n');
        out.push_str(&render_component(component, ui));
    }
    out
}

fn render_component(component: &Component, ui: &UiContext) -> String {
    let (top, side, bottom) = if ui.unicode {
        (theme::borders::TOP, theme::borders::SIDE, theme::borders::BOTTOM)
    } else {
        (
            theme::borders_ascii::TOP,
            theme::borders_ascii::SIDE,
            theme::borders_ascii::BOTTOM,
        )
    };

    let mut lines = Vec::new();
    match &component.class {
        Some(class) => lines.push(format!("Class: {}", class)),
        None => lines.push("Class: (created by its parent)".to_string()),
    }
    if let Some(role) = &component.role {
        lines.push(format!("Role: {}", role));
    }
    if !component.children.is_empty() {
        let children: Vec<String> = component
            .children
            .iter()
            .map(|c| match &c.slot {
                Some(slot) => format!("{}: {}", slot, c.target),
                None => c.target.clone(),
            })
            .collect();
        lines.push(format!("Children: {}", children.join(", ")));
    }
    if !component.dependencies.is_empty() {
        let deps: Vec<String> = component
            .dependencies
            .iter()
            .map(|d| format!("{}: {}", d.function, d.target))
            .collect();
        lines.push(format!("Dependencies: {}", deps.join(", ")));
    }
    if !component.affects.is_empty() {
        lines.push(format!("Affects: {}", component.affects.join(", ")));
    }
    if ui.verbose > 0 {
        push_params(&mut lines, "Init", &component.init);
        push_params(&mut lines, "Properties", &component.properties);
        push_params(&mut lines, "Metadata", &component.metadata);
    }

    let mut out = format!("{} {}\n", top, component.name);
    for line in lines {
        out.push_str(&format!("{} {}\n", side, line));
    }
    out.push_str(bottom);
    out.push('\n');
    out
}

fn push_params(lines: &mut Vec<String>, label: &str, params: &BTreeMap<String, ParamValue>) {
    if params.is_empty() {
        return;
    }
    lines.push(format!("{}:", label));
    for (key, value) in params {
        lines.push(format!("  {} = {}", key, value));
    }
}
