use microtopo::config::{ColorMode, Config, Verbosity};

use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    /// 0 = normal, 1 = verbose, 2+ = debug
    pub verbose: u8,
    pub quiet: bool,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, verbose, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let configured = match config.output.verbosity {
            Verbosity::Quiet | Verbosity::Normal => 0,
            Verbosity::Verbose => 1,
            Verbosity::Debug => 2,
        };

        let color = !json
            && match cli_color {
                Some(ColorWhen::Never) => false,
                Some(ColorWhen::Always) => true,
                Some(ColorWhen::Auto) | None => match config.output.color {
                    ColorMode::Never => false,
                    ColorMode::Always => true,
                    ColorMode::Auto => caps.supports_color && !caps.is_ci,
                },
            };

        Self {
            json,
            verbose: verbose.max(configured),
            // -v on the command line beats a quiet config
            quiet: verbose == 0 && config.output.verbosity == Verbosity::Quiet,
            color,
            unicode: caps.supports_unicode,
        }
    }

    /// Plain output, for tests and snapshots.
    #[cfg(test)]
    pub(crate) fn plain() -> Self {
        Self {
            json: false,
            verbose: 0,
            quiet: false,
            color: false,
            unicode: false,
        }
    }
}
