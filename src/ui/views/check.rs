use std::path::Path;

use microtopo::{Severity, ValidationReport, Violation};

use crate::ui::context::UiContext;
use crate::ui::icon::Icon;

pub fn render_check_header(file: &Path, strict_warnings: bool, ui: &UiContext) -> String {
    let mut out = format!(
        "{} microtopo check\nFile: {}\n",
        Icon::Check.colored(ui.color, ui.unicode),
        file.display()
    );
    if strict_warnings {
        out.push_str("Strict: warnings fail the check\n");
    }
    out.push('\n');
    out
}

/// One finding, with its recommendation on the next line.
pub fn render_finding(severity: Severity, violation: &Violation, ui: &UiContext) -> String {
    let icon = match severity {
        Severity::Error => Icon::Error,
        Severity::Warning => Icon::Warning,
    }
    .colored(ui.color, ui.unicode);

    let mut out = if ui.verbose > 0 {
        format!("  {} [{}] {}\n", icon, violation.code(), violation)
    } else {
        format!("  {} {}\n", icon, violation)
    };

    if let Some(rec) = violation.recommendation() {
        out.push_str(&format!(
            "    {} {}\n",
            Icon::Arrow.colored(ui.color, ui.unicode),
            rec
        ));
    }
    out
}

pub fn render_report(report: &ValidationReport, ui: &UiContext) -> String {
    report
        .findings()
        .filter(|(severity, _)| !(ui.quiet && *severity == Severity::Warning))
        .map(|(severity, violation)| render_finding(severity, violation, ui))
        .collect()
}

pub fn render_summary(components: usize, report: &ValidationReport, passed: bool, ui: &UiContext) -> String {
    let icon = if passed { Icon::Success } else { Icon::Error }.colored(ui.color, ui.unicode);
    if report.error_count() == 0 && report.warning_count() == 0 {
        return format!("{} {} components, no problems found\n", icon, components);
    }
    format!(
        "\n{} Summary: {} components, {} errors, {} warnings\n",
        icon,
        components,
        report.error_count(),
        report.warning_count()
    )
}
