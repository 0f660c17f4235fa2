use microtopo::config::ConfigWarning;
use microtopo::ParseWarning;

use crate::ui::context::UiContext;
use crate::ui::icon::Icon;

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    let icon = Icon::Warning.colored(ui.color, ui.unicode);
    for w in warnings {
        match w.line {
            Some(line) => eprintln!("{} Unknown config key '{}' in {}:{}", icon, w.key, w.file.display(), line),
            None => eprintln!("{} Unknown config key '{}' in {}", icon, w.key, w.file.display()),
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}

/// Unknown-field warnings found while parsing.
pub fn print_parse_warnings(warnings: &[ParseWarning], ui: &UiContext) {
    if ui.quiet || ui.json {
        return;
    }
    let icon = Icon::Warning.colored(ui.color, ui.unicode);
    for w in warnings {
        eprintln!("{} {}", icon, w);
    }
}
