use microtopo::ResolvedOrder;

use crate::ui::context::UiContext;
use crate::ui::icon;

pub fn render_order(order: &ResolvedOrder, ui: &UiContext) -> String {
    let mut out = format!("Instantiation order ({} components):\n", order.len());
    let width = order.len().to_string().len();

    for (i, entry) in order.iter().enumerate() {
        out.push_str(&format!("  {:>width$}. {}", i + 1, entry.name, width = width));
        if let Some(creator) = &entry.creator {
            out.push(' ');
            out.push_str(&icon::dim(&format!("(created by {})", creator), ui.color));
        }
        if ui.verbose > 0 {
            out.push_str(&format!(" [depth {}, position {}]", entry.depth, entry.position));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use microtopo::{parse_str, resolve};
    use std::path::Path;

    const STAGES: &str = r#"
"Sample Stage":
    class: actuator.MultiplexActuator
    role: stage
    dependencies: {"x": "Stage X", "y": "Stage Y"}
"Stage Controller":
    class: tmcm.TMCLController
    children: {"x": "Stage X", "y": "Stage Y"}
"Stage X": {}
"Stage Y": {}
"#;

    #[test]
    fn render_order_marks_created_components() {
        let doc = parse_str(STAGES, Path::new("stages.odm.yaml")).unwrap();
        let order = resolve(&doc.topology).unwrap();
        let out = render_order(&order, &UiContext::plain());
        assert_snapshot!(out, @r"
        Instantiation order (4 components):
          1. Stage Controller
          2. Stage X (created by Stage Controller)
          3. Stage Y (created by Stage Controller)
          4. Sample Stage
        ");
    }

    #[test]
    fn verbose_adds_depth() {
        let doc = parse_str(STAGES, Path::new("stages.odm.yaml")).unwrap();
        let order = resolve(&doc.topology).unwrap();
        let mut ui = UiContext::plain();
        ui.verbose = 1;
        let out = render_order(&order, &ui);
        assert!(out.contains("4. Sample Stage [depth 2, position 0]"));
    }
}
