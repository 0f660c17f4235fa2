use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Component,
    Arrow,
    Edge,
    Check,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Component) => theme::icons::COMPONENT,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Edge) => theme::icons::EDGE,
            (true, Icon::Check) => theme::icons::CHECK,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Component) => theme::icons_ascii::COMPONENT,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Edge) => theme::icons_ascii::EDGE,
            (false, Icon::Check) => theme::icons_ascii::CHECK,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow | Icon::Edge => theme::colors::DIM,
            Icon::Component | Icon::Check => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

/// Text in one of the theme colors, or plain when color is off.
pub fn dim(text: &str, supports_color: bool) -> String {
    if supports_color {
        format!("{}", text.with(theme::colors::DIM))
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_ascii_when_unicode_unsupported() {
        assert_eq!(Icon::Success.render(false), "[OK]");
        assert_eq!(Icon::Edge.render(false), "->");
        assert_eq!(Icon::Error.render(true), "✗");
    }

    #[test]
    fn icon_colored_without_color_is_plain() {
        assert_eq!(Icon::Warning.colored(false, true), "⚠");
        assert_eq!(Icon::Arrow.colored(false, false), "[>]");
    }

    #[test]
    fn dim_is_plain_without_color() {
        assert_eq!(dim("created by SECOM", false), "created by SECOM");
    }
}
