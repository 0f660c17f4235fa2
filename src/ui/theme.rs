use crossterm::style::Color;

/// Design tokens for the microtopo CLI.
///
/// All colors and icons used by views come from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const COMPONENT: &str = "●";
    pub const ARROW: &str = "↳";
    pub const EDGE: &str = "→";
    pub const CHECK: &str = "🔍";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const COMPONENT: &str = "*";
    pub const ARROW: &str = "[>]";
    pub const EDGE: &str = "->";
    pub const CHECK: &str = "[CHECK]";
}

pub mod borders {
    pub const TOP: &str = "╭─";
    pub const SIDE: &str = "│ ";
    pub const BOTTOM: &str = "╰─";
}

pub mod borders_ascii {
    pub const TOP: &str = "+-";
    pub const SIDE: &str = "| ";
    pub const BOTTOM: &str = "+-";
}
