use microtopo::RoleIndex;

use crate::ui::context::UiContext;
use crate::ui::icon;

pub fn render_roles(index: &RoleIndex, ui: &UiContext) -> String {
    let mut out = String::new();
    for (role, names) in &index.roles {
        out.push_str(&format!("{}: {}\n", role, names.join(", ")));
    }
    if !index.unassigned.is_empty() {
        out.push_str(&icon::dim(
            &format!("(no role): {}", index.unassigned.join(", ")),
            ui.color,
        ));
        out.push('\n');
    }
    out
}

/// Components holding `role`, one per line.
pub fn render_role(index: &RoleIndex, role: &str) -> String {
    let names = index.get(role);
    if names.is_empty() {
        return format!("No component has role '{}'\n", role);
    }
    names.iter().map(|n| format!("{}\n", n)).collect()
}
